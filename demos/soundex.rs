use rsoundex::{Encoder, Soundex};

#[allow(clippy::disallowed_macros)]
fn main() {
    let soundex = Soundex::default();
    for word in std::env::args().skip(1) {
        println!("{}\t{}", word, soundex.encode(&word));
    }
}
