use facecube::prelude::*;

fn main() -> anyhow::Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    let mut args = std::env::args().skip(1);
    let description = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: facecube <stickers> [moves]"))?;

    let mut cube = RawInput::detect(&description).parse()?;
    log::info!("cube input validated");

    if let Some(sequence) = args.next() {
        cube = cube.apply_all(Move::parse_sequence(&sequence)?);
    }

    print!("{cube}");
    println!("{}", encode(&cube)?);

    Ok(())
}
