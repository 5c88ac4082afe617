// src/message.rs

/// Capacity of the receive buffer on both sides, not counting the
/// terminator byte.
pub const MSG_SIZE: usize = 1024;

/// Encode display text for the wire: the raw bytes followed by a NUL
/// terminator. There is no framing beyond the terminator.
pub fn encode_text(text: &str) -> Vec<u8> {
    let mut bytes = text.as_bytes().to_vec();
    bytes.push(0);
    bytes
}

/// Decode received bytes as display text, stopping at the first NUL. A peer
/// that never sent a terminator gets the whole slice decoded instead.
pub fn decode_text(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

pub fn greeting(pid: u32) -> String {
    format!("Hello world from client {}!", pid)
}

pub fn reply(pid: u32) -> String {
    format!("Reply from server {}!", pid)
}
