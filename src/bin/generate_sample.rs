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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Sampling stations every 0.5 km along a 30 km stretch below the outfall.
    let distances: Vec<f64> = (0..=60).map(|i| i as f64 * 0.5).collect();

    // Concentration falls off roughly linearly downstream; the noise stands
    // in for measurement error and local inflows.
    let outfall_concentration = 12.5; // mg/L at the discharge point
    let decay_per_km = 0.35;
    let noise_level = 0.4;

    let output_path = "river_samples.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["distance_km", "concentration_mg_l"])
        .expect("Failed to write header");

    for &distance in &distances {
        let concentration =
            (outfall_concentration - decay_per_km * distance + rng.gauss(0.0, noise_level))
                .max(0.05);
        writer
            .write_record([format!("{distance:.2}"), format!("{concentration:.3}")])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {} samples to {output_path}", distances.len());
}
