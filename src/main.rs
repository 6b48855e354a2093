use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tinyqr::{render, Charset, Flag, Generator, MaskScope, Scanner};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Largest module size accepted for PNG output.
const MAX_PIXEL: i64 = render::raster::MAX_PIXEL as i64;

#[derive(Parser)]
#[command(name = "tinyqr", version, about = "Version 1-M QR code generator")]
struct Cli {
	/// Log debug output (overridden by RUST_LOG).
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Encode up to 14 bytes of text into a QR code.
	Generate {
		/// Text to encode, or a file path when --file is given.
		text: String,
		/// Read the text from the file at TEXT.
		#[arg(short, long)]
		file: bool,
		/// Write a PNG here instead of printing to the terminal.
		#[arg(short, long)]
		output: Option<PathBuf>,
		/// Pixels per module in the PNG.
		#[arg(
			short,
			long,
			default_value_t = 5,
			value_parser = clap::value_parser!(u32).range(1..=MAX_PIXEL)
		)]
		pixel: u32,
		/// Byte encoding of the text.
		#[arg(long, value_enum, default_value_t = CharsetArg::Utf8)]
		charset: CharsetArg,
		/// Which data bits the checkerboard mask inverts.
		#[arg(long, value_enum, default_value_t = MaskScopeArg::Exempt)]
		mask_scope: MaskScopeArg,
		/// Print light modules as blocks in terminal output.
		#[arg(long)]
		invert: bool,
		/// Decode the generated symbol and check it matches the text.
		#[arg(long)]
		verify: bool,
	},
	/// Decode the QR codes found in an image.
	Scan {
		/// Path to a PNG or JPEG image.
		image: PathBuf,
	},
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CharsetArg {
	Utf8,
	Windows1252,
}

impl From<CharsetArg> for Charset {
	fn from(arg: CharsetArg) -> Self {
		match arg {
			CharsetArg::Utf8 => Charset::Utf8,
			CharsetArg::Windows1252 => Charset::Windows1252,
		}
	}
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MaskScopeArg {
	/// Leave mode indicator and terminator unmasked.
	Exempt,
	/// Mask every data and ECC bit.
	Uniform,
}

impl From<MaskScopeArg> for MaskScope {
	fn from(arg: MaskScopeArg) -> Self {
		match arg {
			MaskScopeArg::Exempt => MaskScope::ExemptModeAndTerminator,
			MaskScopeArg::Uniform => MaskScope::Uniform,
		}
	}
}

fn init_tracing(verbose: bool) {
	let default = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr).compact())
		.init();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command {
		Command::Generate {
			text,
			file,
			output,
			pixel,
			charset,
			mask_scope,
			invert,
			verify,
		} => {
			let text = if file {
				fs::read_to_string(&text).with_context(|| format!("read {text}"))?
			} else {
				text
			};

			let charset = Charset::from(charset);
			let message = charset.translate(&text)?;
			info!(charset = charset.name(), len = message.len(), "translated text");

			let flag = Flag::new().with_mask_scope(mask_scope.into());
			let matrix = Generator::new(flag).generate(&message)?;

			match output {
				Some(path) => {
					render::raster::render(&matrix, pixel)?
						.save(&path)
						.with_context(|| format!("write {}", path.display()))?;
					println!("QR code written into {}.", path.display());
				}
				None => print!("{}", render::text::render(&matrix, invert)),
			}

			if verify {
				let decoded = Scanner::scan_symbol(&matrix).context("verify symbol")?;
				if !decoded.contains(&message) {
					bail!("verification failed: decoded {decoded:02X?}, expected {message:02X?}");
				}
				println!("verified: {} bytes", message.len());
			}
		}
		Command::Scan { image } => {
			let contents = Scanner::scan_path(&image)
				.with_context(|| format!("scan {}", image.display()))?;
			for (idx, content) in contents.iter().enumerate() {
				println!("Content #{idx} ---");
				println!("{}", String::from_utf8_lossy(content));
			}
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
		Cli::try_parse_from(args)
	}

	#[test]
	fn pixel_size_is_bounded() {
		assert!(parse(&["tinyqr", "generate", "-o", "x.png", "hi"]).is_ok());
		assert!(parse(&["tinyqr", "generate", "--pixel", "0", "hi"]).is_err());
		assert!(
			parse(&["tinyqr", "generate", "--pixel", "4000000000", "-o", "x.png", "hi"]).is_err()
		);

		let max = MAX_PIXEL.to_string();
		assert!(parse(&["tinyqr", "generate", "--pixel", &max, "hi"]).is_ok());
	}

	#[test]
	fn charset_and_scope_flags() {
		let cli = parse(&[
			"tinyqr",
			"generate",
			"--charset",
			"windows1252",
			"--mask-scope",
			"uniform",
			"--verify",
			"café",
		])
		.unwrap();
		match cli.command {
			Command::Generate { charset, mask_scope, verify, .. } => {
				assert_eq!(Charset::from(charset), Charset::Windows1252);
				assert_eq!(MaskScope::from(mask_scope), MaskScope::Uniform);
				assert!(verify);
			}
			Command::Scan { .. } => panic!("expected generate"),
		}
	}
}
