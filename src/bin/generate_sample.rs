use anyhow::{Context, Result};
use serde::Serialize;

use student_dashboard::config::DATA_FILE;

const ROWS: usize = 1000;

const GENDERS: [&str; 2] = ["female", "male"];
const RACES: [&str; 5] = ["group A", "group B", "group C", "group D", "group E"];
/// Parental education levels with a score bonus each.
const EDUCATION: [(&str, f64); 6] = [
    ("some high school", -4.0),
    ("high school", -3.0),
    ("some college", 0.0),
    ("associate's degree", 1.5),
    ("bachelor's degree", 3.5),
    ("master's degree", 5.0),
];
const LUNCH: [(&str, f64); 2] = [("standard", 4.0), ("free/reduced", -6.0)];
const TEST_PREP: [(&str, f64); 2] = [("none", -2.0), ("completed", 5.0)];

#[derive(Serialize)]
struct SampleRow<'a> {
    gender: &'a str,
    #[serde(rename = "race/ethnicity")]
    race_ethnicity: &'a str,
    #[serde(rename = "parental level of education")]
    parental_education: &'a str,
    lunch: &'a str,
    #[serde(rename = "test preparation course")]
    test_preparation: &'a str,
    #[serde(rename = "math score")]
    math: u32,
    #[serde(rename = "reading score")]
    reading: u32,
    #[serde(rename = "writing score")]
    writing: u32,
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
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn score(&mut self, mean: f64) -> u32 {
        self.gauss(mean, 13.0).round().clamp(0.0, 100.0) as u32
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(DATA_FILE)
        .with_context(|| format!("creating {DATA_FILE}"))?;

    for _ in 0..ROWS {
        let gender = *rng.pick(&GENDERS);
        let race = *rng.pick(&RACES);
        let &(education, edu_bonus) = rng.pick(&EDUCATION);
        let &(lunch, lunch_bonus) = rng.pick(&LUNCH);
        let &(prep, prep_bonus) = rng.pick(&TEST_PREP);

        let base = 66.0 + edu_bonus + lunch_bonus + prep_bonus;
        // Boys lead slightly in math, girls in reading and writing.
        let (math_shift, verbal_shift) = if gender == "male" { (3.0, -3.5) } else { (-2.5, 4.0) };

        let row = SampleRow {
            gender,
            race_ethnicity: race,
            parental_education: education,
            lunch,
            test_preparation: prep,
            math: rng.score(base + math_shift),
            reading: rng.score(base + verbal_shift),
            writing: rng.score(base + verbal_shift - 1.0),
        };
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {ROWS} students to {DATA_FILE}");
    Ok(())
}
