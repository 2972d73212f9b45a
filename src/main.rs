use std::env;
use std::error::Error;
use std::process::ExitCode;

use image::Rgb;
use qrsmith::{ECLevel, Encoder, Mode, Version};

fn main() -> ExitCode {
    let args = env::args().collect::<Vec<_>>();
    if args.len() == 1 {
        println!(
            "Usage: {} -[M]V-E -numeric|-alpha|-byte <message> [-light {{R,G,B}}] \
             [-dark {{R,G,B}}] -output <filename>\n\
             M: produce a Micro QR symbol (-M1 selects M1 with error detection only)\n\
             V: version number, up to 40 for QR symbols and 4 for Micro QR symbols\n\
             E: error correction level, one of L, M, Q, H\n\
             The symbol version must be the first argument; the rest may appear in any order",
            args[0]
        );
        return ExitCode::SUCCESS;
    }

    match run(&args[1..]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (version, ec_level) = parse_symbol(&args[0])?;
    let mut encoder = Encoder::new(version, ec_level)?;
    let mut light = Rgb([255, 255, 255]);
    let mut dark = Rgb([0, 0, 0]);
    let mut output = None;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).ok_or_else(|| format!("Missing value for {}", args[i]))?;
        match args[i].as_str() {
            "-numeric" => encoder.add_characters(value.as_bytes(), Mode::Numeric)?,
            "-alpha" => encoder.add_characters(value.as_bytes(), Mode::Alphanumeric)?,
            "-byte" => encoder.add_characters(value.as_bytes(), Mode::Byte)?,
            "-light" => light = parse_color(value)?,
            "-dark" => dark = parse_color(value)?,
            "-output" => output = Some(value),
            arg => return Err(format!("Unknown argument: {arg}").into()),
        }
        i += 2;
    }

    let output = output.ok_or("No output file given")?;
    encoder.generate_matrix().render_color(4, light, dark).save(output)?;
    Ok(())
}

// First positional argument: -[M]V-E, or the special token -M1
fn parse_symbol(arg: &str) -> Result<(Version, ECLevel), Box<dyn Error>> {
    if arg == "-M1" {
        return Ok((Version::Micro(1), ECLevel::DetectionOnly));
    }

    let body = arg.strip_prefix('-').ok_or("Invalid version")?;
    let (micro, body) = match body.strip_prefix('M') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let (digits, level) = body.split_once('-').ok_or("Invalid version")?;
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("Invalid version".into());
    }
    let version = digits.parse()?;
    let version = if micro { Version::Micro(version) } else { Version::Normal(version) };
    let ec_level = match level {
        "L" => ECLevel::L,
        "M" => ECLevel::M,
        "Q" => ECLevel::Q,
        "H" => ECLevel::H,
        _ => return Err("Invalid error correction level".into()),
    };
    Ok((version, ec_level))
}

// Colors are written {R,G,B} with decimal intensities
fn parse_color(arg: &str) -> Result<Rgb<u8>, Box<dyn Error>> {
    let inner =
        arg.strip_prefix('{').and_then(|s| s.strip_suffix('}')).ok_or("Invalid color")?;
    let mut rgb = [0u8; 3];
    let mut channels = inner.split(',');
    for slot in &mut rgb {
        let channel = channels.next().ok_or("Invalid color")?;
        *slot = channel
            .trim()
            .parse()
            .map_err(|_| "Invalid color intensity. Valid values are [0,255]")?;
    }
    if channels.next().is_some() {
        return Err("Invalid color".into());
    }
    Ok(Rgb(rgb))
}
