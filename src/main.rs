// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

//! Folio CLI entrypoint.
//!
//! By default this runs the interactive wizard TUI against an empty
//! portfolio. `--demo` starts from a filled-in sample portfolio, and
//! `--export <path>` renders the standalone HTML document headlessly
//! instead of opening the TUI.

use std::error::Error;
use std::fs;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--demo] [--template <modern|classic|creative>]\n  {program} [--demo] [--template <name>] --export <path>\n\nTUI mode (default) runs the interactive portfolio wizard.\n\n--demo starts from a built-in sample portfolio instead of an empty one.\n--template preselects the render template (unknown names fall back to modern).\n--export renders the standalone HTML document to <path> and exits without the TUI."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    template: Option<String>,
    export: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--template" => {
                if options.template.is_some() {
                    return Err(());
                }
                let name = args.next().ok_or(())?;
                options.template = Some(name);
            }
            "--export" => {
                if options.export.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.export = Some(path);
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "folio".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let mut data = if options.demo {
            folio::tui::demo_portfolio()
        } else {
            folio::model::PortfolioData::new()
        };
        if let Some(name) = &options.template {
            let template = folio::model::TemplateKind::from_name(name);
            data = folio::ops::update_field(&data, folio::ops::PortfolioField::Template(template));
        }

        if let Some(path) = options.export {
            let html = folio::render::render_document(&data);
            fs::write(&path, html)?;
            eprintln!("folio: wrote {path}");
            return Ok(());
        }

        folio::tui::run_with_portfolio(data)
    })();

    if let Err(err) = result {
        eprintln!("folio: {err}");
        std::process::exit(1);
    }
}
