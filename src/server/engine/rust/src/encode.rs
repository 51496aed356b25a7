/* src/server/engine/rust/src/encode.rs */

/// Percent-encode a value for use as a single path segment.
///
/// Only RFC 3986 unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass through;
/// every other byte of the UTF-8 encoding becomes `%XX` (uppercase hex), so a
/// value can never introduce a `/` or a `{` into the resulting path.
pub fn encode_segment(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  for byte in value.bytes() {
    if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
      out.push(byte as char);
    } else {
      out.push_str(&format!("%{byte:02X}"));
    }
  }
  out
}

/// Decode `%XX` escapes in a path segment. Malformed escapes are kept verbatim;
/// invalid UTF-8 after decoding is replaced lossily.
pub fn decode_segment(segment: &str) -> String {
  let bytes = segment.as_bytes();
  let mut out = Vec::with_capacity(bytes.len());
  let mut i = 0;
  while i < bytes.len() {
    if bytes[i] == b'%' && i + 2 < bytes.len() {
      if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
        out.push((hi << 4) | lo);
        i += 3;
        continue;
      }
    }
    out.push(bytes[i]);
    i += 1;
  }
  String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
  match b {
    b'0'..=b'9' => Some(b - b'0'),
    b'a'..=b'f' => Some(b - b'a' + 10),
    b'A'..=b'F' => Some(b - b'A' + 10),
    _ => None,
  }
}
