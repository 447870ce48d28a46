use oop_showcase::{bootstrap, console, scenarios, Error};

fn main() -> Result<(), Error> {
    bootstrap()?;
    let transcript = scenarios::http_builder().inspect_err(|err| {
        tracing::error!(%err, "builder scenario failed");
    })?;
    console::print_transcript(&transcript)?;
    Ok(())
}
