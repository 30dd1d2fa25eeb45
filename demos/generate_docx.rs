//! Generate a sample Word document.
//!
//! Writes a short document with headings, merged body text and, when an
//! image path is given and exists, an embedded picture.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_docx -- -o generated.docx --image sample/test.png
//! ```
//!
//! Set `RUST_LOG=debug` to see each package part as it is written.

use clap::{Parser, ValueEnum};
use docx_writer::{
    Compression, MutableDocument, PackageWriter, ParagraphStyle, RunFormat, SectionProperties,
    WriterOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a sample .docx document
#[derive(Parser, Debug)]
#[command(name = "generate_docx", version)]
struct Args {
    /// Output file
    #[arg(short, long, value_name = "OUTPUT", default_value = "generated_from_package.docx")]
    output: PathBuf,

    /// Image to embed after the introduction
    #[arg(long, value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Page size
    #[arg(long, value_enum, default_value = "letter")]
    page: PageArg,

    /// Store entries without compression
    #[arg(long)]
    stored: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PageArg {
    Letter,
    A4,
}

fn build_document(args: &Args) -> MutableDocument {
    let section = match args.page {
        PageArg::Letter => SectionProperties::letter(),
        PageArg::A4 => SectionProperties::a4(),
    };
    let mut doc = MutableDocument::with_section(section);

    doc.add_text(
        ParagraphStyle::Heading1,
        "Document Created Using Package",
        RunFormat::ITALIC,
    );
    doc.add_text(ParagraphStyle::Heading2, "Introduction", RunFormat::BOLD);
    doc.add_text(
        ParagraphStyle::Normal,
        "This document demonstrates the direct usage of the docx package.",
        RunFormat::empty(),
    );
    doc.add_text(
        ParagraphStyle::Normal,
        " Multiple calls to add_text with the same style",
        RunFormat::BOLD,
    );
    doc.add_text(
        ParagraphStyle::Normal,
        " append runs to the same paragraph if possible.",
        RunFormat::empty(),
    );
    doc.add_new_line();

    match &args.image {
        Some(path) if path.exists() => {
            println!("Attempting to add image: {}", path.display());
            match doc.add_image_file(path) {
                Ok(()) => {
                    println!("Successfully added image: {}", path.display());
                    doc.add_text(
                        ParagraphStyle::Normal,
                        "An image should be displayed above this text.",
                        RunFormat::ITALIC,
                    );
                    doc.add_new_line();
                },
                Err(e) => eprintln!("Error adding image '{}': {}", path.display(), e),
            }
        },
        Some(path) => {
            println!(
                "Warning: Test image '{}' not found. Skipping image addition.",
                path.display()
            );
        },
        None => {},
    }

    doc.add_text(ParagraphStyle::Heading2, "Conclusion", RunFormat::BOLD);
    doc.add_text(
        ParagraphStyle::Normal,
        "The package structure allows for generating DOCX files.",
        RunFormat::empty(),
    );
    doc
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let doc = build_document(&args);
    let options = WriterOptions {
        compression: if args.stored {
            Compression::Stored
        } else {
            Compression::Deflated
        },
    };

    println!("Writing document to {}...", args.output.display());
    if let Err(e) = PackageWriter::with_options(options).write_to_path(&args.output, &doc) {
        eprintln!("Error writing document '{}': {}", args.output.display(), e);
        return ExitCode::FAILURE;
    }

    println!("Docx file successfully written to {}", args.output.display());
    ExitCode::SUCCESS
}
