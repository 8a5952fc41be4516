/// Composes the single error-banner line from the
/// transport-level description and, when one could
/// be parsed, the server's JSON `message`. A new
/// failure always overwrites the previous line;
/// the banner is a slot, not a log.
pub fn error_line(
  status: &str,
  message: Option<&str>
) -> String {
  let detail = match message {
    | Some(message) => {
      format!("{status} - {message}")
    }
    | None => status.to_string()
  };

  format!(
    "Something has gone wrong with \
     this request. The server replied \
     with a status of: {detail}"
  )
}
