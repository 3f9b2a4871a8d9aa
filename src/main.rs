use clap::{Parser, ValueEnum};
use log::info;

use logic_proofs::formula::Formula;
use logic_proofs::laws::{circuit_table, de_morgan, distributive, equivalent};
use logic_proofs::ops::implies;
use logic_proofs::proof::{contains_duplicate_contradiction, contains_duplicate_direct, insertion_sort_invariant};
use logic_proofs::table::{TableStyle, TruthTable};
use logic_proofs::validate::{check_access_permissions, validate_user_input};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Section {
    Algebra,
    TruthTable,
    Circuit,
    Validation,
    Proofs,
    Summary,
}

impl Section {
    const ALL: [Section; 6] = [
        Section::Algebra,
        Section::TruthTable,
        Section::Circuit,
        Section::Validation,
        Section::Proofs,
        Section::Summary,
    ];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for simplelog::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => simplelog::LevelFilter::Off,
            LogLevel::Error => simplelog::LevelFilter::Error,
            LogLevel::Warn => simplelog::LevelFilter::Warn,
            LogLevel::Info => simplelog::LevelFilter::Info,
            LogLevel::Debug => simplelog::LevelFilter::Debug,
            LogLevel::Trace => simplelog::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Logic and proofs: programming applications")]
struct Cli {
    /// Sections to show (default: all, in order).
    #[arg(value_enum, value_name = "SECTION")]
    sections: Vec<Section>,

    /// Log level.
    #[clap(long, value_enum, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level.into(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    info!("args = {:?}", args);

    let sections = if args.sections.is_empty() {
        Section::ALL.to_vec()
    } else {
        args.sections
    };

    println!("Chapter 1: Logic and Proofs - Programming Applications");
    println!("{}", "=".repeat(60));

    for section in sections {
        match section {
            Section::Algebra => show_boolean_algebra(),
            Section::TruthTable => show_truth_table()?,
            Section::Circuit => show_circuit()?,
            Section::Validation => show_validation(),
            Section::Proofs => show_proofs(),
            Section::Summary => show_summary(),
        }
    }

    Ok(())
}

fn show_boolean_algebra() {
    println!("=== Boolean Algebra Demonstrations ===\n");

    println!("De Morgan's Laws:");
    for check in de_morgan() {
        let (p, q) = (check.inputs[0], check.inputs[1]);
        if check.holds() {
            println!(
                "¬(p ∧ q) ≡ ¬p ∨ ¬q: p={}, q={} → {} ≡ {} ✓",
                p, q, check.left, check.right
            );
        } else {
            println!("✗");
        }
    }

    println!("\nDistributive Law:");
    for check in distributive() {
        let (p, q, r) = (check.inputs[0], check.inputs[1], check.inputs[2]);
        println!(
            "p ∧ (q ∨ r) ≡ (p ∧ q) ∨ (p ∧ r): p={}, q={}, r={} → {} ≡ {}",
            p, q, r, check.left, check.right
        );
    }

    let p = || Formula::var("p");
    let q = || Formula::var("q");
    let law = Formula::implies(p(), q());
    let contrapositive = Formula::implies(Formula::not(q()), Formula::not(p()));
    println!(
        "\nContrapositive: {} ≡ {}: {}",
        law,
        contrapositive,
        equivalent(&law, &contrapositive)
    );
}

fn show_truth_table() -> color_eyre::Result<()> {
    println!("\n=== Truth Table Generation ===");

    let table = TruthTable::new(&["p", "q", "r"], |a| implies(a["p"] && a["q"], a["r"])).with_label("(p ∧ q) → r");
    print!("{}", table.to_text()?);

    let formula = Formula::iff(Formula::var("p"), Formula::not(Formula::var("q")));
    let table = formula.truth_table();
    println!();
    print!("{}", table.to_text()?);
    println!("function number: {}", table.function_number());

    Ok(())
}

fn show_circuit() -> color_eyre::Result<()> {
    println!("\n=== Logic Circuit Simulation ===\n");
    println!("Circuit: (p ∧ ¬q) ∨ ¬r");
    print!("{}", circuit_table().to_text_with_style(&TableStyle::digits())?);
    Ok(())
}

fn show_validation() {
    println!("\n=== Logical Validation Example ===");

    let test_cases = [
        ("john", "Password123", "john@email.com"),
        ("ab", "weak", "invalid-email"),
        ("admin", "StrongPass1", "admin@company.com"),
    ];

    for (username, password, email) in test_cases {
        let (is_valid, errors) = validate_user_input(username, password, email);
        println!("Input: {}, {}, {}", username, password, email);
        println!("Valid: {}", is_valid);
        if !errors.is_empty() {
            println!("Errors: {:?}", errors);
        }
        println!();
    }

    let requests = [
        ("admin", "alice", "bob", false),
        ("user", "alice", "alice", false),
        ("user", "alice", "bob", true),
        ("user", "alice", "bob", false),
    ];
    println!("Access = (admin ∨ owner) ∨ public:");
    for (role, owner, user, public) in requests {
        println!(
            "role={}, owner={}, user={}, public={} → {}",
            role,
            owner,
            user,
            public,
            check_access_permissions(role, owner, user, public)
        );
    }
}

fn show_proofs() {
    println!("\n=== Proof Techniques Example ===");

    let test_array = [1, 2, 3, 4, 2, 5];
    let proof = contains_duplicate_direct(&test_array);
    println!("Array: {:?}", test_array);
    println!("Result: {}", proof);

    let proof = contains_duplicate_contradiction(&[1, 2, 3, 4, 5], 3);
    println!("\nContradiction proof: {}", proof);

    let unsorted_array = [64, 34, 25, 12, 22, 11, 90];
    let proof = insertion_sort_invariant(&unsorted_array);
    println!("\n=== Loop Invariant Proof (Insertion Sort) ===");
    println!("Original: {:?}", unsorted_array);
    println!("Sorted: {:?}", proof.value);
    println!("\nProof steps:\n{}", proof);
}

fn show_summary() {
    println!("\n=== Programming Applications Summary ===");
    for line in [
        "Boolean logic for conditional statements",
        "Truth tables for exhaustive testing",
        "Logic circuits for hardware design",
        "Validation using logical conditions",
        "Proof techniques for algorithm correctness",
        "Mathematical reasoning in software development",
    ] {
        println!("✓ {}", line);
    }
}
