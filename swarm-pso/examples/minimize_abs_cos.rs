//! Minimize |cos x| Example
//!
//! Finds a zero of cos over two full periods with auto-resolved parameters.

use swarm_pso::prelude::*;

fn main() -> Result<()> {
    println!("swarm-pso |cos x| Example");
    println!("=========================");

    let mut pso = ParticleSwarmOptimizer::new(|x: &[f64]| x[0].cos().abs());
    pso.add_dimension(-2.0 * std::f64::consts::PI, 2.0 * std::f64::consts::PI)?;

    let params = pso.resolved_parameters()?;
    println!("Parameters:");
    println!("  Swarm size: {}", params.swarm_size);
    println!("  Inertia:    {}", params.inertia);
    println!("  Cognitive:  {}", params.cognitive);
    println!("  Social:     {}", params.social);

    let solution = pso.solve()?;
    println!("\nBest position: {:?}", solution.position);
    println!("Best cost:     {}", solution.cost);
    println!("Evaluations:   {}", solution.evaluations);

    Ok(())
}
