use doctor_cell::VisitSlot;

/// First slot owned by the doctor whose raw UTC strings equal the requested
/// window exactly. The comparison is deliberately on the untransformed
/// strings rather than parsed instants, so the remote's string contract
/// stays the source of truth. Linear scan; slot lists are small and
/// short-lived.
pub fn find_matching_slot<'a>(
    slots: &'a [VisitSlot],
    doctor_id: i32,
    start_time_utc: &str,
    end_time_utc: &str,
) -> Option<&'a VisitSlot> {
    slots.iter().find(|slot| {
        slot.doctor_id == doctor_id
            && slot.start_time_utc == start_time_utc
            && slot.end_time_utc == end_time_utc
    })
}
