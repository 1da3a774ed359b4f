// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_assistant_reply(size: usize) -> String {
    let base = "## Summary\n\nHere is **the short version** with *some emphasis* and a [link](https://example.com/docs).\n\n- First point\n- Second point with `inline code`\n1. Ordered step\n\n> A quoted remark\n\n| Name | Value |\n|------|-------|\n| alpha | 1 |\n| beta | 2 |\n\n```rust\nfn example() {\n    println!(\"**not bold**\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_paragraphs(paragraphs: usize, words: usize) -> String {
    let mut content = String::new();

    for p in 0..paragraphs {
        for w in 0..words {
            content.push_str(&format!("word{p}x{w} "));
        }
        content.push_str("\n\n");
    }

    content
}
