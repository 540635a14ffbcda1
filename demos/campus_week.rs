//! End-to-end run on a small campus dataset.
//!
//! Builds a two-room, two-teacher week, evolves a timetable, prints the
//! result with its violation breakdown and fitness history, and writes
//! `schedule.csv`.
//!
//! Run with `RUST_LOG=debug` to watch per-generation progress.

use std::fs::File;
use std::io::BufWriter;

use timetable_ga::export;
use timetable_ga::ga::{GaConfig, GaRunner};
use timetable_ga::models::{ClassSession, Room, StudentGroup, Teacher, TimeSlot};
use timetable_ga::problem::TimetableProblem;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let rooms = vec![
        Room::new("A101", 50).with_equipment("Projector"),
        Room::new("B202", 30).with_equipment("Whiteboard"),
    ];
    let teachers = vec![
        Teacher::new("T1")
            .with_subject("Math")
            .with_subject("Physics")
            .with_available_slot("Monday 8AM")
            .with_available_slot("Tuesday 10AM"),
        Teacher::new("T2")
            .with_subject("English")
            .with_available_slot("Monday 10AM")
            .with_available_slot("Wednesday 8AM"),
    ];
    let groups = vec![
        StudentGroup::new("S1").with_subject("Math").with_subject("English"),
        StudentGroup::new("S2").with_subject("Physics").with_subject("English"),
    ];
    let sessions = vec![
        ClassSession::new("Math", "T1", "S1")
            .with_slot_span(2)
            .with_required_equipment("Projector"),
        ClassSession::new("Physics", "T1", "S2").with_slot_span(2),
        ClassSession::new("English", "T2", "S1")
            .with_slot_span(2)
            .with_required_equipment("Whiteboard"),
    ];
    let slots = vec![
        TimeSlot::new("Monday 8AM"),
        TimeSlot::new("Monday 10AM"),
        TimeSlot::new("Tuesday 8AM"),
        TimeSlot::new("Wednesday 8AM"),
    ];

    let problem = TimetableProblem::new(sessions, rooms, teachers, groups, slots)?;
    let config = GaConfig::default().with_generations(100).with_seed(2024);
    let result = GaRunner::run(&problem, &config)?;
    let timetable = problem.decode(&result.best, &config.weights);

    println!("Timetable (fitness {}):", timetable.fitness);
    println!("{:<10} {:<8} {:<6} {:<6} {}", "Subject", "Teacher", "Group", "Room", "Time");
    for entry in &timetable.entries {
        println!(
            "{:<10} {:<8} {:<6} {:<6} {}",
            entry.subject, entry.teacher_id, entry.group_id, entry.room_id, entry.slot
        );
    }

    if timetable.is_conflict_free() {
        println!("\nNo conflicts.");
    } else {
        println!("\nConflicts:");
        for v in &timetable.violations {
            println!("  -{:>3} {}", v.penalty, v.message);
        }
    }

    println!("\nOptimization progress (best fitness per generation):");
    for (generation, fitness) in result.history.iter().enumerate() {
        if generation % 10 == 0 || generation + 1 == result.history.len() {
            let bar = "#".repeat((-fitness).min(40) as usize);
            println!("{generation:>4} {fitness:>5} {bar}");
        }
    }

    let file = File::create("schedule.csv")?;
    export::write_csv(&timetable, BufWriter::new(file))?;
    println!("\nTimetable written to schedule.csv");

    Ok(())
}
