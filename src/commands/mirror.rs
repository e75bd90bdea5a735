//! Mirror command implementation

use console::Style;

use crate::cli::MirrorArgs;
use crate::error::Result;
use crate::mirror::MirrorSpec;
use crate::path_utils;

/// Run mirror command, one mirror operation per pattern in argument order
pub fn run(args: MirrorArgs) -> Result<()> {
    let mut total = 0;

    for pattern in &args.patterns {
        let result = MirrorSpec::new(&args.source, &args.destination, pattern).run()?;
        let count = format!("{:>4}", result.len());
        println!("  {} {}", Style::new().bold().apply_to(count), pattern);
        for path in result.relative_paths() {
            println!("       {}", Style::new().dim().apply_to(path_utils::to_forward_slashes(path)));
        }
        total += result.len();
    }

    println!(
        "{} {} files into {}",
        Style::new().bold().green().apply_to("Mirrored"),
        total,
        args.destination.display()
    );
    Ok(())
}
