//! Extraction instruction

/// Instruction sent alongside every image.
///
/// Pins the output to a bare JSON array of `summary`/`start_iso`/`end_iso`
/// objects in 24-hour ISO-8601, and names the year to assume when the plan
/// omits it.
pub fn extraction_instruction(current_year: i32) -> String {
    format!(
        "Extract the schedule from this image of a handwritten or printed plan.\n\
         Return ONLY a JSON array, with no commentary.\n\
         Format: [{{\"summary\": \"Task\", \"start_iso\": \"{current_year}-12-29T09:00:00\", \"end_iso\": \"{current_year}-12-29T12:00:00\"}}]\n\
         Use ISO-8601 timestamps without a UTC offset and the 24-hour clock.\n\
         Assume the current year ({current_year}) if the year is missing."
    )
}
