/// Pick the field separator from the header line: `;` wins over `,`.
pub fn detect_separator(header: &str) -> char {
    if header.contains(';') { ';' } else { ',' }
}
