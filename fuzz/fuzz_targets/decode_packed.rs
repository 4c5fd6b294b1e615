use beachcomber::{decode, materialize, CodecSchema, PAGE_COUNT};
use honggfuzz::fuzz;

fn main() {
    let schema = CodecSchema::reference();
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(tiles) = decode(data, &schema) {
                assert_eq!(materialize(&tiles).len(), PAGE_COUNT);
            }
        });
    }
}
