//! Seatplan Headless Harness
//!
//! Validates seating logic without any UI. Runs entirely in-process.
//! With `--roster` it plans a class from a file and prints the chart.
//!
//! Usage:
//!   cargo run -p seatplan-simtest
//!   cargo run -p seatplan-simtest -- --verbose
//!   cargo run -p seatplan-simtest -- --roster names.txt --table-size 2 --json

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seatplan_core::classroom::Classroom;
use seatplan_core::mutate::{self, TableTarget};
use seatplan_core::prelude::*;
use seatplan_core::randomize;
use seatplan_logic::intake::{self, validate_intake, MAX_CLASS_SIZE, MIN_CLASS_SIZE};
use seatplan_logic::occupancy;
use seatplan_logic::resolver;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "seatplan-simtest", version, about = "Headless checks and roster planning for Seatplan")]
struct Cli {
    /// Print every check, not just failures.
    #[arg(long)]
    verbose: bool,
    /// RNG seed for reproducible runs.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Plan this roster file (one name per line) instead of running checks.
    #[arg(long, value_name = "PATH")]
    roster: Option<PathBuf>,
    /// Seats per table.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=4))]
    table_size: u32,
    /// Number of tables (default: the minimum that fits the roster).
    #[arg(long, value_name = "COUNT")]
    tables: Option<u32>,
    /// Print the planned classroom as JSON.
    #[arg(long)]
    json: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    if let Some(path) = &cli.roster {
        return plan_roster(&cli, path);
    }

    println!("=== Seatplan Harness ===\n");
    let mut results = Vec::new();

    // 1. Seat grid
    results.extend(validate_layout(cli.verbose));

    // 2. Occupancy & resolver
    results.extend(validate_queries(cli.verbose));

    // 3. Intake rules
    results.extend(validate_intake_rules(cli.verbose));

    // 4. Randomizer sweep
    results.extend(validate_randomizer(cli.seed, cli.verbose));

    // 5. Mutator & swap mode
    results.extend(validate_mutator(cli.seed));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || cli.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

// ── Roster planning ─────────────────────────────────────────────────────

fn plan_roster(cli: &Cli, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let roster: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    let mut request = IntakeRequest::new(roster, cli.table_size);
    request.table_count = cli.tables;

    let mut session = SeatingSession::new(SessionOptions {
        seed: Some(cli.seed),
        ..Default::default()
    });
    let room = match session.start(&request) {
        Ok(room) => room,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(room)?);
        return Ok(());
    }

    println!(
        "{} students, {} tables of {}\n",
        room.config.class_size, room.config.table_count, room.config.table_capacity
    );
    for table in &room.tables {
        let seated = room.occupants(&table.id);
        println!("{} ({}/{})", table.display_name(), seated.len(), table.capacity);
        for person in seated {
            println!("    {}", person.name);
        }
    }
    let loose = room.unassigned();
    if !loose.is_empty() {
        println!("Unassigned:");
        for person in loose {
            println!("    {}", person.name);
        }
    }
    Ok(())
}

fn class(n: usize, capacity: u32, tables: Option<u32>, seed: u64) -> Option<Classroom> {
    let mut session = SeatingSession::new(SessionOptions {
        seed: Some(seed),
        ..Default::default()
    });
    let mut request = IntakeRequest::new((0..n).map(|i| format!("S{i}")).collect(), capacity);
    request.table_count = tables;
    session.start(&request).ok().cloned()
}

// ── 1. Seat grid ────────────────────────────────────────────────────────

fn validate_layout(verbose: bool) -> Vec<TestResult> {
    println!("--- Seat Grid ---");
    let mut results = Vec::new();

    for (label, layout) in [("seated", SeatLayout::SEATED), ("drop_snap", SeatLayout::DROP_SNAP)] {
        for capacity in [1u32, 2, 3, 4, 6] {
            let slots = layout.slots_for_capacity(capacity);
            let mut distinct = true;
            for i in 0..slots.len() {
                for j in (i + 1)..slots.len() {
                    if slots[i].near(slots[j], occupancy::SLOT_TOLERANCE) {
                        distinct = false;
                    }
                }
            }
            results.push(TestResult {
                name: format!("layout_{}_cap{}", label, capacity),
                passed: slots.len() == capacity as usize
                    && distinct
                    && slots == layout.slots_for_capacity(capacity),
                detail: format!("{} seats, separated={}", slots.len(), distinct),
            });
        }
    }

    if verbose {
        for capacity in [1u32, 2, 4] {
            println!(
                "  cap {}: seated={:?}",
                capacity,
                SeatLayout::SEATED.slots_for_capacity(capacity)
            );
        }
    }

    results
}

// ── 2. Occupancy & resolver ─────────────────────────────────────────────

fn validate_queries(_verbose: bool) -> Vec<TestResult> {
    println!("--- Occupancy & Resolver ---");
    let mut results = Vec::new();
    let layout = SeatLayout::SEATED;

    let Some(room) = class(12, 4, Some(4), 1) else {
        results.push(TestResult {
            name: "queries_setup".into(),
            passed: false,
            detail: "could not build a 12-person class".into(),
        });
        return results;
    };

    // Every seated person is found at their own seat, and only there
    let mut self_hits = 0;
    for person in &room.people {
        let Some(table) = person.table_id.as_ref().and_then(|id| room.table(id)) else {
            continue;
        };
        let slot = resolver::nearest_slot(person.position, std::slice::from_ref(table), &layout);
        let found = slot
            .as_ref()
            .and_then(|s| occupancy::occupant_of(s, &room.people, None))
            .map(|p| p.id == person.id)
            .unwrap_or(false);
        if found {
            self_hits += 1;
        }
    }
    results.push(TestResult {
        name: "occupancy_self_lookup".into(),
        passed: self_hits == room.people.len(),
        detail: format!("{}/{} people found at their seat", self_hits, room.people.len()),
    });

    // Free seats + occupants = capacity for every table
    let balanced = room.tables.iter().all(|t| {
        occupancy::free_slots(t, &layout, &room.people, None).len()
            + occupancy::occupant_count(&t.id, &room.people)
            == t.capacity as usize
    });
    results.push(TestResult {
        name: "occupancy_free_plus_seated".into(),
        passed: balanced,
        detail: "free + seated == capacity on every table".into(),
    });

    // Dropping onto a tile center finds that person
    let tile_hits = room
        .people
        .iter()
        .filter(|p| {
            resolver::tile_center(p, &room.tables)
                .and_then(|c| resolver::person_at_point(c, &room.people, &room.tables, None))
                .is_some_and(|hit| hit.id == p.id)
        })
        .count();
    results.push(TestResult {
        name: "resolver_tile_hits".into(),
        passed: tile_hits == room.people.len(),
        detail: format!("{}/{} tiles resolve to their person", tile_hits, room.people.len()),
    });

    // No tables, no seat
    results.push(TestResult {
        name: "resolver_empty".into(),
        passed: resolver::nearest_slot(Point::ORIGIN, &[], &layout).is_none(),
        detail: "nearest_slot over no tables is None".into(),
    });

    results
}

// ── 3. Intake ───────────────────────────────────────────────────────────

fn validate_intake_rules(_verbose: bool) -> Vec<TestResult> {
    println!("--- Intake ---");
    let mut results = Vec::new();
    let names = |n: usize| (0..n).map(|i| format!("S{i}")).collect::<Vec<_>>();

    // Minimum tables across the whole accepted range
    let mut mismatches = 0;
    for size in MIN_CLASS_SIZE..=MAX_CLASS_SIZE {
        for capacity in intake::SUPPORTED_TABLE_SIZES {
            match validate_intake(&IntakeRequest::new(names(size as usize), capacity)) {
                Ok(plan) if plan.table_count * capacity >= size
                    && (plan.table_count - 1) * capacity < size => {}
                _ => mismatches += 1,
            }
        }
    }
    results.push(TestResult {
        name: "intake_minimum_tables".into(),
        passed: mismatches == 0,
        detail: format!("{} bad plans across sizes 9-40", mismatches),
    });

    let small = validate_intake(&IntakeRequest::new(names(8), 4));
    let large = validate_intake(&IntakeRequest::new(names(41), 4));
    results.push(TestResult {
        name: "intake_class_bounds".into(),
        passed: small.is_err() && large.is_err(),
        detail: "8 and 41 rejected".into(),
    });

    let short = validate_intake(&IntakeRequest::new(names(10), 4).with_table_count(2));
    results.push(TestResult {
        name: "intake_too_few_tables".into(),
        passed: matches!(short, Err(IntakeError::TooFewTables { minimum: 3, .. })),
        detail: match short {
            Err(e) => e.to_string(),
            Ok(_) => "accepted 2 tables for 10 students".into(),
        },
    });

    results
}

// ── 4. Randomizer ───────────────────────────────────────────────────────

fn validate_randomizer(seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Randomizer ---");
    let mut results = Vec::new();
    let layout = SeatLayout::SEATED;
    let mut rng = StdRng::seed_from_u64(seed);

    for (n, capacity, tables) in [(9usize, 4u32, None), (25, 2, Some(14)), (40, 1, None)] {
        let Some(mut room) = class(n, capacity, tables, seed) else {
            continue;
        };
        // Lock every third person.
        for i in (0..n).step_by(3) {
            room = mutate::toggle_lock(&room, &PersonId::new(i.to_string()));
        }
        let locked: Vec<Person> = room.people.iter().filter(|p| p.is_locked).cloned().collect();

        let mut broken = 0;
        let mut moved_locked = 0;
        let mut unseated = 0;
        for _ in 0..200 {
            let next = randomize::randomize(&room, &layout, &mut rng);
            if !next.violations().is_empty() {
                broken += 1;
            }
            moved_locked += locked
                .iter()
                .filter(|p| next.person(&p.id) != Some(*p))
                .count();
            unseated += next.unassigned().len();
        }

        results.push(TestResult {
            name: format!("randomize_{}x{}", n, capacity),
            passed: broken == 0 && moved_locked == 0 && unseated == 0,
            detail: format!(
                "200 runs: {} inconsistent, {} locked moved, {} unseated",
                broken, moved_locked, unseated
            ),
        });
    }

    if verbose {
        if let Some(room) = class(9, 4, None, seed) {
            let report = randomize::deal(&room.people, &room.tables, &layout, &mut rng).1;
            println!(
                "  9x4 deal: pooled={} dealt={} unserved={}",
                report.pooled, report.dealt, report.unserved
            );
        }
    }

    results
}

// ── 5. Mutator & swap mode ──────────────────────────────────────────────

fn validate_mutator(seed: u64) -> Vec<TestResult> {
    println!("--- Mutator & Swap Mode ---");
    let mut results = Vec::new();

    let Some(room) = class(16, 4, None, seed) else {
        return results;
    };
    let a = PersonId::new("0");
    let b = PersonId::new("5");

    let twice = mutate::swap(&mutate::swap(&room, &a, &b), &a, &b);
    results.push(TestResult {
        name: "swap_self_inverse".into(),
        passed: twice == room,
        detail: "swap(a,b) twice restores both".into(),
    });

    let locked_twice = mutate::toggle_lock(&mutate::toggle_lock(&room, &a), &a);
    results.push(TestResult {
        name: "lock_involutive".into(),
        passed: locked_twice == room,
        detail: "toggle_lock twice is identity".into(),
    });

    let ghost = PersonId::new("ghost");
    let untouched = mutate::swap(&room, &a, &ghost) == room
        && mutate::toggle_lock(&room, &ghost) == room
        && mutate::move_person(&room, &ghost, Point::ORIGIN, TableTarget::Unassigned) == room;
    results.push(TestResult {
        name: "unknown_ids_noop".into(),
        passed: untouched,
        detail: "operations on unknown ids leave the snapshot alone".into(),
    });

    let cleared = mutate::move_person(&room, &a, Point::new(50.0, 50.0), TableTarget::Unassigned);
    let gone = cleared.person(&a).is_some_and(|p| p.table_id.is_none())
        && cleared
            .tables
            .iter()
            .all(|t| cleared.occupants(&t.id).iter().all(|p| p.id != a));
    results.push(TestResult {
        name: "move_unassign".into(),
        passed: gone,
        detail: "explicit unassign removes from every table".into(),
    });

    let (armed, first) = SwapSelection::Idle.select(a.clone());
    let (cancelled, second) = armed.clone().select(a.clone());
    let (_, third) = armed.select(b.clone());
    results.push(TestResult {
        name: "swap_mode_cycle".into(),
        passed: first.is_none()
            && second.is_none()
            && cancelled == SwapSelection::Idle
            && third == Some(SwapRequest { first: a, second: b }),
        detail: "arm, cancel, arm, complete".into(),
    });

    results
}

