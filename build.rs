extern crate cargo_metadata;
extern crate glob;

use std::{
    env,
    error::Error,
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use cargo_metadata::MetadataCommand;
use glob::glob;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=src/messages");
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Search for and compile message source files
    for entry in glob("src/messages/*.in")? {
        let path = entry?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(".in"))
            .ok_or_else(|| format!("bad message file name: {}", path.display()))?
            .to_owned();
        compile_message(&name)?;
    }
    Ok(())
}

macro_rules! replace_with_env {
    ( $buf:expr; $( $a:literal -> $b:literal ),+ $(,)? ) => {
        $( $buf = $buf.replace(concat!("%",$a,"%"), &env::var($b)?); )+
    };
}

fn compile_message(name: &str) -> Result<(), Box<dyn Error>> {
    let mut inbuf = BufReader::new(File::open(format!("src/messages/{}.in", name))?);

    let dest_dir = Path::new(&env::var("OUT_DIR")?).join("messages");
    fs::create_dir_all(&dest_dir)?;
    let mut outbuf = BufWriter::new(File::create(dest_dir.join(name))?);

    let mut message = String::new();
    inbuf.read_to_string(&mut message)?;

    replace_with_env! { message;
        "PROGNAME" -> "CARGO_PKG_NAME",
        "VERSION" -> "CARGO_PKG_VERSION",
    };

    let authors = env::var("CARGO_PKG_AUTHORS")?;
    let first_author: String = authors.chars().take_while(|c| *c != ':').collect();
    message = message.replace("%PRIMARY_AUTHOR%", &first_author);

    // Cargo.toml must contain:
    //
    //     [package.metadata]
    //     copyright-years = "..."
    //
    let package_name = env::var("CARGO_PKG_NAME")?;
    let metadata = MetadataCommand::new().no_deps().exec()?;
    let years = metadata
        .packages
        .iter()
        .find(|pkg| pkg.name == package_name)
        .and_then(|pkg| pkg.metadata["copyright-years"].as_str())
        .ok_or("can't find `package.metadata.copyright-years` in Cargo.toml")?
        .to_owned();
    message = message.replace("%YEARS%", &years);

    outbuf.write_all(message.as_bytes())?;
    Ok(())
}
