use zerostr::{
    is_all_digits, split_view, try_parse_bool, try_parse_int, StrView,
};

fn main() {
    println!("=== Zerostr Demo ===\n");

    // Demonstrate StrView
    println!("1. StrView Zero-Copy Operations:");
    let text = "The quick brown fox jumps over the lazy dog";
    let s = StrView::from_string(text);

    println!("   Original: '{}'", s);
    println!("   Length: {} bytes", s.len());
    println!("   Starts with 'The': {}", s.starts_with("The"));
    println!("   Contains 'fox': {}", s.contains("fox"));
    println!("   Substring(4, 5): '{}'", s.substring(4, 5));

    let padded = StrView::from_string("   trimmed   ");
    println!("   Trimmed: '{}'", padded.trim());
    println!("   Uppercase: '{}'", s.prefix(9).to_uppercase());

    // Demonstrate lazy splitting
    println!("\n2. Lazy Splitting:");
    let words: Vec<_> = s.split(b' ').collect();
    println!("   Split into {} words:", words.len());
    for (i, word) in words.iter().enumerate() {
        println!("     {}: '{}'", i + 1, word);
    }

    // Empty segments are preserved
    let csv = "alpha,,gamma,";
    println!("   CSV row '{}' has segments:", csv);
    for field in &split_view(csv, b',') {
        println!("     [{}]", field);
    }

    // Demonstrate multi-pass iteration
    println!("\n3. Multi-Pass Iteration:");
    let splitter = split_view("1,2,3,4,5", b',');
    let count = splitter.iter().count();
    let numeric = splitter.iter().filter(|f| is_all_digits(*f)).count();
    println!("   {} segments, {} numeric (two independent passes)", count, numeric);

    // Demonstrate parsing
    println!("\n4. Strict Parsing:");
    for input in ["42", "-17", "+5", "4.2", "oops"] {
        match try_parse_int(input) {
            Some(n) => println!("   '{}' -> {}", input, n),
            None => println!("   '{}' -> rejected", input),
        }
    }
    for input in ["true", "ON", "no", "2"] {
        match try_parse_bool(input) {
            Some(b) => println!("   '{}' -> {}", input, b),
            None => println!("   '{}' -> rejected", input),
        }
    }

    println!("\nDone.");
}
