/// A record that attributes itself to one or more accounts.
///
/// `reassign_owner` re-points every attribution field equal to `from` and
/// leaves the others alone. It returns whether anything changed, so a
/// record that is already owned by `to` is a no-op.
pub trait OwnedRecord {
    fn id(&self) -> i64;

    fn reassign_owner(&mut self, from: i64, to: i64) -> bool;
}

pub(crate) fn repoint(field: &mut i64, from: i64, to: i64) -> bool {
    if *field == from && from != to {
        *field = to;
        true
    } else {
        false
    }
}

pub(crate) fn repoint_optional(field: &mut Option<i64>, from: i64, to: i64) -> bool {
    match field {
        Some(owner) => repoint(owner, from, to),
        None => false,
    }
}
