use tapegrad::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let x = Var::new(2.0);
    let y = Var::new(3.0);
    let z = &x * &y + x.try_sin()?;
    println!("z = x * y + sin(x) = {}", z);
    println!("{}", z.graph_string());

    let [dx, dy] = z.try_derivative([&x, &y])?;
    println!("dz/dx = {:.6} (expected {:.6})", dx, 3.0 + 2.0f64.cos());
    println!("dz/dy = {:.6} (expected {:.6})", dy, 2.0);

    let x = Var::new(0.5);
    let [dx] = x.try_asin()?.try_derivative([&x])?;
    println!("d asin(x)/dx at 0.5 = {:.6}", dx);

    // Keep the graph around to inspect intermediate gradients.
    let a = Var::new(1.5);
    let hidden = a.try_exp()?;
    let out = &hidden * &hidden;
    out.try_propagate_retained()?;
    println!("d out/d hidden = {}, d out/d a = {}", hidden.try_grad()?, a.try_grad()?);
    println!("live nodes: {}", live_nodes());

    Ok(())
}
