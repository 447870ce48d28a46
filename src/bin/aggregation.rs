use oop_showcase::{bootstrap, console, scenarios, Error};

fn main() -> Result<(), Error> {
    bootstrap()?;
    console::print_transcript(&scenarios::aggregation())?;
    Ok(())
}
