//! Hodge Flow Demo: Random Walks on a Rips Complex
//!
//! ## Protocol
//!
//! 1. Scatter random points in the unit square
//! 2. Triangulate them (Rips triangles at a fixed scale) and take the
//!    partition graph of the faces
//! 3. Extract the complex, boundary operators and L1 spectrum
//! 4. Encode a random walk as an edge flow
//! 5. Split the flow into gradient / curl / harmonic parts
//!
//! Usage: `hodge_flow_demo [config.json]`

use anyhow::{Context, Result};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use hodge_flow::{Graph, HodgeAnalysis, HodgeConfig, RipsTriangulator, SimplicialComplex};

/// Demo parameters, optionally read from a JSON file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct DemoConfig {
    n_points: usize,
    seed: u64,
    rips_epsilon: f64,
    walk_length: usize,
    hodge: HodgeConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            n_points: 40,
            seed: 7,
            rips_epsilon: 0.25,
            walk_length: 60,
            hodge: HodgeConfig::default(),
        }
    }
}

fn load_config() -> Result<DemoConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path))?;
            let config: DemoConfig =
                serde_json::from_str(&text).with_context(|| format!("parsing config {}", path))?;
            config.hodge.validate()?;
            Ok(config)
        }
        None => Ok(DemoConfig::default()),
    }
}

fn random_points(n: usize, rng: &mut StdRng) -> Array2<f64> {
    let unit = Uniform::new(0.0, 1.0);
    Array2::from_shape_fn((n, 2), |_| unit.sample(&mut *rng))
}

/// The 1-skeleton of an extracted complex
fn skeleton(complex: &SimplicialComplex) -> hodge_flow::Result<Graph> {
    let pairs: Vec<(usize, usize)> = complex.edges().iter().map(|e| e.as_pair()).collect();
    Graph::from_edges(complex.n_vertices(), &pairs)
}

/// Walk of `length` steps from a random non-isolated vertex
fn random_walk(graph: &Graph, length: usize, rng: &mut StdRng) -> Vec<usize> {
    let starts: Vec<usize> = (0..graph.n_vertices())
        .filter(|&v| graph.neighbors(v).next().is_some())
        .collect();
    if starts.is_empty() {
        return Vec::new();
    }

    let mut walk = vec![starts[rng.gen_range(0..starts.len())]];
    for _ in 0..length {
        let current = walk[walk.len() - 1];
        let neighbors: Vec<usize> = graph.neighbors(current).collect();
        walk.push(neighbors[rng.gen_range(0..neighbors.len())]);
    }
    walk
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Hodge Flow: Edge Flows on a Rips Complex");
    println!("═══════════════════════════════════════════════════════════════\n");

    let config = load_config()?;

    println!("Parameters:");
    println!("  N = {} points", config.n_points);
    println!("  Rips epsilon = {:.3}", config.rips_epsilon);
    println!("  Walk length = {}", config.walk_length);
    println!("  Seed = {}", config.seed);
    println!();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let points = random_points(config.n_points, &mut rng);

    let triangulator = RipsTriangulator { epsilon: config.rips_epsilon };
    let analysis = HodgeAnalysis::from_points(&points, &triangulator, &config.hodge)?;
    let graph = skeleton(&analysis.complex)?;

    let complex = &analysis.complex;
    println!("Complex:");
    println!("  V = {}, E = {}, T = {}", complex.n_vertices(), complex.n_edges(), complex.n_triangles());
    println!("  χ = {}", complex.euler_characteristic());
    println!("  B1·B2 = 0: {}", analysis.incidence.is_chain_complex());

    let betti = analysis.betti_numbers()?;
    println!("  β₀ = {}, β₁ = {}, β₂ = {}", betti.beta_0, betti.beta_1, betti.beta_2);

    let tolerance = analysis.tolerance();
    let counts = analysis.mode_counts()?;
    println!("\nL1 Spectrum (tolerance {:.1e}):", tolerance);
    println!(
        "  harmonic = {}, gradient = {}, curl = {}, mixed = {}",
        counts.harmonic, counts.gradient, counts.curl, counts.mixed
    );
    let shown = analysis.spectrum.n_modes().min(10);
    for (k, lambda) in analysis.spectrum.eigenvalues.iter().take(shown).enumerate() {
        println!("  λ_{:<2} = {:>10.6}", k, lambda);
    }
    println!("  spectral radius = {:.4}", analysis.spectrum.spectral_radius());

    let walk = random_walk(&graph, config.walk_length, &mut rng);
    if walk.is_empty() {
        println!("\nNo triangles at this scale; nothing to walk on.");
        return Ok(());
    }

    let flow = analysis.encode_walk(&walk)?;
    let decomposition = analysis.decompose(&flow)?;
    let [gradient, curl, harmonic] = decomposition.energies();
    let total = gradient + curl + harmonic;
    let share = |x: f64| if total > 0.0 { 100.0 * x / total } else { 0.0 };

    println!("\nRandom Walk:");
    println!("  {} steps from vertex {} to vertex {}", walk.len() - 1, walk[0], walk[walk.len() - 1]);
    println!("  support = {} edges", flow.iter().filter(|&&x| x != 0).count());
    println!("  ‖f‖² = {:.2}", total);
    println!("  gradient = {:.2} ({:.1}%)", gradient, share(gradient));
    println!("  curl     = {:.2} ({:.1}%)", curl, share(curl));
    println!("  harmonic = {:.2} ({:.1}%)", harmonic, share(harmonic));

    let coefficients = analysis.spectral_coefficients(&flow)?;
    let mut ranked: Vec<(usize, f64)> = coefficients.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.abs().partial_cmp(&a.1.abs()).unwrap_or(std::cmp::Ordering::Equal));

    println!("\nDominant Eigenmodes:");
    for (k, c) in ranked.iter().take(5) {
        println!("  mode {:3}: λ = {:>8.4}, ⟨v, f⟩ = {:>8.4}", k, analysis.spectrum.eigenvalues[*k], c);
    }

    Ok(())
}
