use anyhow::Result;
use std::env::args_os;

fn main() -> Result<()> {
    let args = args_os().skip(1).collect::<Vec<_>>();
    let infallible = ow_launcher::run(&args)?;
    match infallible {}
}
