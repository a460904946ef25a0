use std::io::{self, Write};

use greyfinch_api::Booking;

pub const HEADER: &str = "Today's Agenda";
pub const NO_BOOKINGS: &str = "- No bookings found.";

pub fn write_agenda<W: Write>(out: &mut W, bookings: &[Booking]) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    if bookings.is_empty() {
        writeln!(out, "{NO_BOOKINGS}")?;
        return Ok(());
    }

    for booking in bookings {
        writeln!(
            out,
            "- {} {}: {}",
            booking.local_start_date, booking.local_start_time, booking.first_name
        )?;
    }

    Ok(())
}
