use game_person::{PersonRecord, Profession, RecordBuilder, Step};

fn main() {
    // Rejected steps show up as warnings on stderr.
    tracing_subscriber::fmt().init();

    let person = RecordBuilder::new()
        .step(Step::Name("Torvald the Smith".into()))
        .step(Step::Coordinates { x: 120, y: -45, z: 7 })
        .step(Step::Gold(2500))
        .step(Step::Health(1000))
        .step(Step::Mana(350))
        .step(Step::Respect(8))
        .step(Step::Strength(6))
        .step(Step::Experience(12))
        .step(Step::Level(4))
        .step(Step::House)
        .step(Step::Family)
        .step(Step::from(Profession::Blacksmith))
        .step(Step::Mana(5000)) // out of range: skipped, mana stays 350
        .build();

    println!("Built record ({} bytes): {:#?}\n", person.as_bytes().len(), person);

    println!("head word: {:#018x}", u64::from_ne_bytes(person.as_bytes()[..8].try_into().unwrap()));
    println!("name:      {}", person.name());
    println!("position:  ({}, {}, {})", person.x(), person.y(), person.z());
    println!("mana:      {} (the 5000 write was rejected)", person.mana());
    println!("kind:      {:?}", person.kind());

    // The byte view is the wire/storage surface.
    let bytes = person.as_bytes().to_vec();
    let restored = PersonRecord::try_from_bytes(&bytes).unwrap();
    assert_eq!(restored, person);
    println!("\nRestored from {} bytes: {}", bytes.len(), restored.name());
}
