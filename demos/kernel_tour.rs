use anyhow::{anyhow, Context, Result};
use log::info;

use redeem_linalg::{Matrix, Notation, RenderConfig, Vector};

fn main() -> Result<()> {
    env_logger::init();

    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
        .context("Failed to build matrix a")?;
    let id = Matrix::identity(3, 3).context("Failed to build identity")?;
    info!("Built a {:?} matrix and a {:?} identity", a.shape(), id.shape());

    let sum = a
        .add(&id)
        .ok_or_else(|| anyhow!("a + I: dimension mismatch"))?;
    println!("a + I =\n{}", sum);

    let block = a
        .get_block(0, 1, 1, 2)
        .ok_or_else(|| anyhow!("invalid block corners"))?;
    let fixed = RenderConfig::new(2, 8, Notation::Fixed);
    println!("upper-right block of a =\n{}", block.render(&fixed));

    let row = a.get_row(1).ok_or_else(|| anyhow!("row 1 out of range"))?;
    let col = a.get_col(1).ok_or_else(|| anyhow!("column 1 out of range"))?;
    println!("row 1 = {}, column 1 = {}", row, col);
    println!("row 1 . column 1 = {}", row.dot(&col));

    let halves = Vector::from_slice(&[0.5, 0.25])
        .ok_or_else(|| anyhow!("empty input"))?
        .merge(&row)
        .apply_func(f64::sqrt);
    println!("sqrt of merged entries = {}", halves.render(&RenderConfig::default()));

    // Fail-soft access next to the checked variant.
    println!("a.get(3, 0) = {}", a.get(3, 0));
    if let Err(e) = a.get_checked(3, 0) {
        println!("a.get_checked(3, 0) failed: {}", e);
    }

    Ok(())
}
