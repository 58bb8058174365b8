// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n> A quote\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_tables(count: usize, rows: usize) -> String {
    let mut content = String::new();
    for table in 0..count {
        content.push_str(&format!("### Table {table}\n\n| Name | Value | Note |\n|---|---:|:---|\n"));
        for row in 0..rows {
            content.push_str(&format!("| item {row} | {} | `code` |\n", row * 3));
        }
        content.push('\n');
    }
    content
}
