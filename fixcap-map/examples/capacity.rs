//! Walks a map through filling, rejection, updates and deletes.

use fixcap_map::{FixedCapacityHashMap, Polynomial31};

fn main() -> Result<(), fixcap_map::Error> {
    println!("=== Fixed-Capacity HashMap Demo ===\n");

    let mut map = FixedCapacityHashMap::new(1000)?;
    println!(
        "capacity {} -> bucket array of {}",
        map.capacity(),
        map.array_size()
    );

    for i in 0..1000 {
        map.set(&format!("key{}", i), format!("value{}", i));
    }
    println!("filled: size {}, load {:.2}", map.size(), map.load());

    let accepted = map.set("tooManyKeys", "x".to_string());
    println!("set(\"tooManyKeys\") on a full map -> {}", accepted);
    println!("set(\"key7\") update on a full map -> {}", map.set("key7", "seven".to_string()));

    for i in 0..500 {
        map.delete(&format!("key{}", i));
    }
    println!("after deleting 500 keys: size {}, load {:.2}\n", map.size(), map.load());

    // Collision spread with the default hasher vs. the polynomial one.
    let mut poly = FixedCapacityHashMap::with_hasher(1000, Polynomial31)?;
    let mut fold = FixedCapacityHashMap::new(1000)?;
    for i in 0..1000 {
        let key = format!("key{}", i);
        poly.set(&key, i);
        fold.set(&key, i);
    }
    println!("default hasher: {:?}", fold.chain_stats());
    println!("polynomial31:   {:?}", poly.chain_stats());

    println!("\n=== Demo Complete ===");
    Ok(())
}
