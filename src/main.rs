use hashed_splays::word_count::HashedSplays;
use std::env;
use std::process;

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: hashed-splays <text-file>");
            process::exit(1);
        }
    };

    let mut table = HashedSplays::with_alphabet();
    if let Err(err) = table.process_file(&path) {
        eprintln!("Error reading {}: {:?}", path, err);
        process::exit(1);
    }

    for report in table.reports() {
        println!("{}", report);
    }

    if let Some(tree) = table.tree_for('t') {
        println!();
        println!("Words in the 't' bucket:");
        for record in tree {
            println!("{}", record);
        }
        println!("This tree has {} splays.", tree.splay_count());
    }

    println!();
    println!("Words containing \"the\":");
    for record in table.find_all("the") {
        println!("{}", record);
    }
}
