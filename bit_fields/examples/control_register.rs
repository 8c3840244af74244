use bit_fields::BitField;

// 32-bit hardware control register laid out as a table of constants.
const MODE: BitField = BitField::new(0, 3);
const ENABLE: BitField = MODE.next(1);
const CHANNEL: BitField = ENABLE.next(4);
const THRESHOLD: BitField = CHANNEL.next(8);
const COUNTER: BitField = THRESHOLD.next(16);

fn main() {
    println!("=== Control Register Example ===\n");

    let mut reg = 0u64;
    reg = MODE.write(reg, 5);
    reg = ENABLE.set(reg);
    reg = CHANNEL.write(reg, 12);
    reg = THRESHOLD.write(reg, 128);
    reg = COUNTER.write(reg, 1000);

    println!("Control Register:");
    println!("  Mode:      {}", MODE.read(reg));
    println!("  Enabled:   {}", ENABLE.is_set(reg));
    println!("  Channel:   {}", CHANNEL.read(reg));
    println!("  Threshold: {}", THRESHOLD.read(reg));
    println!("  Counter:   {}", COUNTER.read(reg));

    println!("\nRaw register value: 0x{:08X}", reg as u32);

    // Out-of-range values are caught before any bit moves.
    match CHANNEL.try_write(reg, 99) {
        Ok(_) => println!("unexpected"),
        Err(e) => println!("Rejected write: {}", e),
    }
}
