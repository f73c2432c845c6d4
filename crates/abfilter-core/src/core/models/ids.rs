/// Serial number of an atom as written in the structure file.
///
/// Serials are only unique within one structure; they are the keys shared by the
/// atom table, the bonded graph, the role sets and the peak-list atom column.
pub type AtomSerial = usize;
