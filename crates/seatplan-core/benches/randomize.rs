use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seatplan_core::classroom::Classroom;
use seatplan_core::mutate::toggle_lock;
use seatplan_core::randomize::randomize;
use seatplan_logic::floor::FloorPlan;
use seatplan_logic::intake::{validate_intake, IntakeRequest};
use seatplan_logic::layout::SeatLayout;
use seatplan_logic::model::PersonId;

fn full_class(capacity: u32) -> Classroom {
    let roster = (0..40).map(|i| format!("Student {i}")).collect();
    let plan = validate_intake(&IntakeRequest::new(roster, capacity)).expect("valid intake");
    let mut rng = StdRng::seed_from_u64(1);
    let mut room = Classroom::from_plan(&plan, &FloorPlan::default(), &SeatLayout::SEATED, &mut rng);
    for i in (0..40).step_by(5) {
        room = toggle_lock(&room, &PersonId::new(i.to_string()));
    }
    room
}

fn bench_randomize(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    for capacity in [1, 2, 4] {
        let room = full_class(capacity);
        c.bench_function(&format!("randomize_40_people_cap{capacity}"), |b| {
            b.iter(|| randomize(black_box(&room), &SeatLayout::SEATED, &mut rng))
        });
    }
}

criterion_group!(benches, bench_randomize);
criterion_main!(benches);
