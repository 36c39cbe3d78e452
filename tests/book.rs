use std::fs;

use physcalc::{Bindings, evaluate};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_blocks(&content).into_iter().enumerate() {
            count += check_block(&block).unwrap_or_else(|e| {
                                            panic!("Example {} in {:?} failed:\n{}\nError: {}",
                                                   i + 1,
                                                   path,
                                                   block,
                                                   e)
                                        });
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Runs every `expression => expected` line of a block and returns how many
/// were checked.
fn check_block(block: &str) -> Result<usize, String> {
    let mut bindings = Bindings::new();
    let mut checked = 0;

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((expression, expected)) = line.split_once("=>") {
            let expected: f64 = expected.trim()
                                        .parse()
                                        .map_err(|_| format!("Bad expectation: {line}"))?;
            let value = evaluate(expression, &bindings).map_err(|e| e.to_string())?;
            if value != expected && (value - expected).abs() > 1e-9 {
                return Err(format!("{expression} gave {value}, expected {expected}"));
            }
            checked += 1;
        } else if let Some((name, value)) = line.split_once('=') {
            let value = value.trim()
                             .parse()
                             .map_err(|_| format!("Bad binding: {line}"))?;
            bindings.insert(name.trim().to_string(), value);
        } else {
            return Err(format!("Unrecognized line: {line}"));
        }
    }

    Ok(checked)
}

fn extract_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```physcalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
