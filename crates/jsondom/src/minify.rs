//! In-place JSON minification.

use bstr::ByteSlice;

/// Strips insignificant whitespace and comments from JSON text, in place.
///
/// Two cursors walk the same buffer, the read cursor always at or ahead of
/// the write cursor, and the buffer is truncated to what was written:
///
/// - spaces, tabs and line endings outside string literals are dropped;
/// - `//` line comments are dropped up to (not including) the next newline,
///   which the whitespace rule then consumes;
/// - `/* … */` block comments are dropped inclusively; an unterminated one
///   consumes the rest of the input;
/// - string literals are copied byte-for-byte, a backslash and its follower
///   treated as an atomic unit so escaped quotes do not end the literal;
/// - everything else is copied verbatim.
///
/// The input does not have to be valid JSON; the pass never reads past the
/// end of the buffer.
///
/// # Examples
///
/// ```
/// let mut json = b"{ \"a\" : 1 } // done".to_vec();
/// jsondom::minify(&mut json);
/// assert_eq!(json, b"{\"a\":1}");
/// ```
pub fn minify(json: &mut Vec<u8>) {
    let mut read = 0;
    let mut write = 0;
    while read < json.len() {
        match json[read] {
            b' ' | b'\t' | b'\r' | b'\n' => read += 1,
            b'/' if json.get(read + 1) == Some(&b'/') => {
                read += 2;
                read = json[read..]
                    .find_byte(b'\n')
                    .map_or(json.len(), |at| read + at);
            }
            b'/' if json.get(read + 1) == Some(&b'*') => {
                // the terminator search starts at the opening `*` so that
                // `/*/` closes on its shared asterisk
                read = json[read + 1..]
                    .find(b"*/")
                    .map_or(json.len(), |at| read + 1 + at + 2);
            }
            b'"' => {
                json[write] = b'"';
                write += 1;
                read += 1;
                while read < json.len() && json[read] != b'"' {
                    if json[read] == b'\\' {
                        json[write] = json[read];
                        write += 1;
                        read += 1;
                        if read >= json.len() {
                            break;
                        }
                    }
                    json[write] = json[read];
                    write += 1;
                    read += 1;
                }
                if read < json.len() {
                    json[write] = b'"';
                    write += 1;
                    read += 1;
                }
            }
            byte => {
                json[write] = byte;
                write += 1;
                read += 1;
            }
        }
    }
    json.truncate(write);
}
