//! Write a deterministic synthetic HR attrition CSV with the dashboard's
//! schema, for trying the app without the IBM dataset.
//!
//! Usage: generate_sample [OUTPUT] [--count N] [--seed S]

use std::path::PathBuf;

use anyhow::{Context, Result};
use attrition_dash::data::export::{employees_to_csv, write_export};
use attrition_dash::data::model::{Employee, Flag};
use clap::Parser;

#[derive(Parser)]
#[command(name = "generate_sample")]
#[command(about = "Generate a synthetic HR attrition CSV")]
struct Cli {
    /// Output CSV path
    #[arg(default_value = "sample_hr_data.csv")]
    output: PathBuf,

    /// Number of employees
    #[arg(short, long, default_value_t = 1470)]
    count: u32,

    /// PRNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: u32, hi: u32) -> u32 {
        lo + (self.next_f64() * f64::from(hi - lo + 1)) as u32
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next_f64() * items.len() as f64) as usize % items.len()]
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

const DEPARTMENTS: [(&str, &[&str]); 3] = [
    (
        "Sales",
        &["Sales Executive", "Sales Representative", "Manager"],
    ),
    (
        "Research & Development",
        &[
            "Research Scientist",
            "Laboratory Technician",
            "Manufacturing Director",
            "Healthcare Representative",
            "Research Director",
        ],
    ),
    ("Human Resources", &["Human Resources", "Manager"]),
];

const EDUCATION_FIELDS: [&str; 6] = [
    "Life Sciences",
    "Medical",
    "Marketing",
    "Technical Degree",
    "Other",
    "Human Resources",
];

fn generate_employee(rng: &mut SimpleRng, employee_number: u32) -> Employee {
    let dept_idx = match rng.next_f64() {
        p if p < 0.30 => 0,
        p if p < 0.96 => 1,
        _ => 2,
    };
    let (department, roles) = DEPARTMENTS[dept_idx];

    let age = rng.range(18, 60);
    let job_level = (1 + (age.saturating_sub(18) / 9)).min(5) as u8;
    let monthly_income = 1000 + u32::from(job_level) * 2500 + rng.range(0, 3000);
    let years_at_company = rng.range(0, (age - 18).min(40));
    let over_time = Flag::from(rng.chance(0.28));
    let work_life_balance = rng.range(1, 4) as u8;

    // Leaving is likelier with overtime, youth, low pay, short tenure and poor balance.
    let mut risk: f64 = 0.06;
    if over_time.is_yes() {
        risk += 0.15;
    }
    if age < 30 {
        risk += 0.08;
    }
    if monthly_income < 4000 {
        risk += 0.07;
    }
    if years_at_company < 2 {
        risk += 0.08;
    }
    if work_life_balance == 1 {
        risk += 0.08;
    }
    let attrition = Flag::from(rng.chance(risk.min(0.9)));

    Employee {
        age,
        attrition,
        department: department.to_string(),
        distance_from_home: rng.range(1, 29),
        education_field: rng.pick(&EDUCATION_FIELDS).to_string(),
        employee_number,
        job_level,
        job_role: rng.pick(roles).to_string(),
        job_satisfaction: rng.range(1, 4) as u8,
        monthly_income,
        over_time,
        work_life_balance,
        years_at_company,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut rng = SimpleRng::new(cli.seed);

    let employees: Vec<Employee> = (1..=cli.count)
        .map(|id| generate_employee(&mut rng, id))
        .collect();

    let text = employees_to_csv(&employees).context("serializing employees")?;
    write_export(&cli.output, &text)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    let leavers = employees.iter().filter(|e| e.has_left()).count();
    println!(
        "Wrote {} employees ({leavers} leavers) to {}",
        employees.len(),
        cli.output.display()
    );
    Ok(())
}
