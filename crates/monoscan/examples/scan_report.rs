//! Runs every scan on its reference input and prints the result summaries.
//!
//! ```text
//! cargo run --example scan_report
//! ```

use monoscan::prelude::*;

fn main() -> Result<(), ScanError> {
    let scanner = MonoScan::new()
        .threshold(3)
        .window(3)
        .return_stats()
        .return_boundaries()
        .build()?;

    println!("{}", scanner.next_warmer(&[73, 74, 75, 71, 69, 72, 76, 73])?);
    println!("{}", scanner.largest_rectangle(&[2, 1, 5, 6, 2, 3])?);
    println!("{}", scanner.shortest_subarray(&[2, -1, 2])?);
    println!("{}", scanner.shortest_subarray(&[1, 1])?);
    println!("{}", scanner.find_132(&[-1, 3, 2, 0])?);
    println!("{}", scanner.find_132(&[1, 2, 3, 4])?);
    println!("{}", scanner.sliding_max(&[1, 3, -1, -3, 5, 3, 6, 7])?);

    match scanner.largest_rectangle(&[4, -2, 1]) {
        Ok(result) => println!("{result}"),
        Err(err) => println!("Rejected: {err}"),
    }

    Ok(())
}
