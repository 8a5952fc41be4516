use gloo::net::http::{
  Request,
  Response
};
use sifterdeck_core::report;
use sifterdeck_shared::{
  ApiError,
  RunSifterArgs,
  TaskEnvelope
};

/// Launches one sifter run. The server answers with
/// the full task collection, exactly like a status
/// refresh.
pub async fn run_sifter(
  base: &str,
  args: &RunSifterArgs
) -> Result<TaskEnvelope, String> {
  let request =
    Request::post(&format!(
      "{base}/run"
    ))
    .json(args)
    .map_err(|error| {
      report::error_line(
        &format!(
          "request encoding failed: \
           {error}"
        ),
        None
      )
    })?;

  read_envelope(
    request.send().await
  )
  .await
}

pub async fn refresh_status(
  base: &str
) -> Result<TaskEnvelope, String> {
  read_envelope(
    Request::put(&format!(
      "{base}/update_task_status"
    ))
    .send()
    .await
  )
  .await
}

pub async fn clear_completed(
  base: &str
) -> Result<TaskEnvelope, String> {
  read_envelope(
    Request::delete(&format!(
      "{base}/clear_complete_tasks"
    ))
    .send()
    .await
  )
  .await
}

/// Funnels every outcome into exactly one of two
/// continuations: a decoded task envelope, or a
/// single banner line. Network failures, non-2xx
/// replies and undecodable bodies all take the
/// second path.
async fn read_envelope(
  sent: Result<
    Response,
    gloo::net::Error
  >
) -> Result<TaskEnvelope, String> {
  let response =
    sent.map_err(|error| {
      report::error_line(
        &error.to_string(),
        None
      )
    })?;

  if !response.ok() {
    let status = format!(
      "{} {}",
      response.status(),
      response.status_text()
    );
    let message = match response
      .text()
      .await
    {
      | Ok(body) => {
        serde_json::from_str::<ApiError>(
          &body
        )
        .ok()
        .map(|error| error.message)
      }
      | Err(_) => None
    };

    return Err(report::error_line(
      &status,
      message.as_deref()
    ));
  }

  response
    .json::<TaskEnvelope>()
    .await
    .map_err(|error| {
      report::error_line(
        &format!(
          "undecodable response \
           body: {error}"
        ),
        None
      )
    })
}
