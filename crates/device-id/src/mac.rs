//! Placeholder MAC addresses for labels.
//!
//! These are never read from hardware. The first octet has the locally
//! administered bit set so the value can't collide with a vendor-assigned
//! address.

/// Fixed prefix of every synthetic address.
pub const SYNTHETIC_OUI: [u8; 3] = [0x02, 0x00, 0x00];

/// Build the synthetic MAC for a device number from its low 24 bits.
pub fn synthetic_mac(number: u32) -> String {
    let [_, a, b, c] = number.to_be_bytes();
    let [p0, p1, p2] = SYNTHETIC_OUI;
    format!("{p0:02X}:{p1:02X}:{p2:02X}:{a:02X}:{b:02X}:{c:02X}")
}
