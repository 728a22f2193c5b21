use anyhow::Result;
use nimbus_css3::parser_config::ParserConfig;
use nimbus_css3::tokenizer::Tokenizer;
use nimbus_css3::walker::{token_literal, Walker};
use nimbus_css3::Css3;
use nimbus_shared::byte_stream::ByteStream;
use simple_logger::SimpleLogger;
use std::fs;
use std::process::exit;

fn bail(message: &str) -> ! {
    println!("{message}");
    exit(1);
}

fn main() -> Result<()> {
    let matches = clap::Command::new("Nimbus CSS3 parser")
        .version("0.1.0")
        .arg(
            clap::Arg::new("file")
                .help("The CSS file to parse")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("tokens")
                .help("Print the token stream instead of the parsed tree")
                .long("tokens")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("debug")
                .help("Enable debug logging")
                .short('d')
                .long("debug")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let debug = matches.get_flag("debug");
    let tokens = matches.get_flag("tokens");
    let file: String = matches.get_one::<String>("file").expect("file").to_string();

    if debug {
        SimpleLogger::new().init()?;
    }

    let css = fs::read(&file)?;

    let mut stream = ByteStream::new(None);
    stream.read_from_bytes(&css);

    if tokens {
        // --tokens mode: one token per line, ending with the EOF token
        let tokenizer = Tokenizer::new(&mut stream);
        for token in tokenizer {
            println!("{}", token_literal(&token));
        }

        return Ok(());
    }

    let config = ParserConfig {
        source: Some(file.clone()),
        ..Default::default()
    };

    let res = Css3::parse_stream(&mut stream, config);
    match res {
        Ok(sheet) => {
            Walker::new(&sheet).walk_stdout();

            for log in &sheet.parse_log {
                log::warn!("{log}");
            }

            Ok(())
        }
        Err(e) => {
            // only resource limits make the parse itself fail
            bail(&format!("could not parse {file}: {e}"));
        }
    }
}
