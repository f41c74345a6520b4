use dom::Node;
use dom::build::{doc, elem, form, input, text};
use mimalloc::MiMalloc;
use page::{Page, script};
use std::io::Read;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: ghostfield [SCRIPT]  (reads the script from stdin when omitted)";

/// Demo page: a search box and a small signup form.
fn demo_page() -> Node {
    doc(vec![elem(
        "body",
        Vec::new(),
        vec![
            form(
                "search",
                vec![input("search", vec![("id", "q"), ("name", "q"), ("value", "Search")])],
            ),
            form(
                "signup",
                vec![
                    input("email", vec![("id", "email"), ("name", "email"), ("value", "Email")]),
                    elem(
                        "textarea",
                        vec![("id", "bio"), ("name", "bio")],
                        vec![text("Tell us about yourself")],
                    ),
                ],
            ),
        ],
    )])
}

fn read_script(path: Option<String>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut src = String::new();
            std::io::stdin().read_to_string(&mut src)?;
            Ok(src)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next();
    if args.next().is_some() || path.as_deref().is_some_and(|p| p == "-h" || p == "--help") {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    let src = match read_script(path) {
        Ok(src) => src,
        Err(err) => {
            eprintln!("ghostfield: cannot read script: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut page = Page::new(demo_page());
    log::debug!("running script ({} bytes)", src.len());
    match script::run(&mut page, &src) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ghostfield: {err}");
            ExitCode::FAILURE
        }
    }
}
