use std::cell::RefCell;
use std::collections::BTreeMap;
use std::future::Future;
use std::rc::Rc;

use sifterdeck_core::projection;
use sifterdeck_core::sequence::RequestLedger;
use sifterdeck_shared::{
  RunSifterArgs,
  Task,
  TaskEnvelope,
  TaskId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  UseStateHandle,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::api;
use crate::boot::BootConfig;
use crate::components::{
  ErrorBanner,
  FailureModal,
  SifterControls,
  TaskActions,
  TaskTable
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: BootConfig
}

/// Runs one intent against the server. The sequence
/// number taken at dispatch gates both
/// continuations: a response that is no longer the
/// latest issued is dropped unseen, so the task
/// table and the error slot only ever reflect the
/// newest request that resolved.
fn dispatch<F>(
  intent: &'static str,
  ledger: Rc<RefCell<RequestLedger>>,
  tasks: UseStateHandle<Vec<Task>>,
  snapshot_seq: UseStateHandle<u64>,
  error_line: UseStateHandle<
    Option<String>,
  >,
  request: F
) where
  F: Future<
      Output = Result<
        TaskEnvelope,
        String,
      >,
    > + 'static
{
  let seq = ledger.borrow_mut().begin();
  tracing::debug!(
    intent,
    seq,
    "dispatching request"
  );

  wasm_bindgen_futures::spawn_local(
    async move {
      let outcome = request.await;

      if !ledger
        .borrow()
        .is_current(seq)
      {
        tracing::debug!(
          intent,
          seq,
          latest =
            ledger.borrow().issued(),
          "dropping stale response"
        );
        return;
      }

      match outcome {
        | Ok(envelope) => {
          tracing::debug!(
            intent,
            seq,
            total =
              envelope.tasks.len(),
            "applying task snapshot"
          );
          tasks.set(envelope.tasks);
          snapshot_seq.set(seq);
        }
        | Err(line) => {
          tracing::error!(
            intent,
            seq,
            error = %line,
            "request failed"
          );
          error_line.set(Some(line));
        }
      }
    }
  );
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let tasks =
    use_state(Vec::<Task>::new);
  let snapshot_seq =
    use_state(|| 0_u64);
  let error_line =
    use_state(|| None::<String>);
  let extra_args = use_state(
    BTreeMap::<String, String>::new
  );
  let open_failure =
    use_state(|| None::<TaskId>);
  let ledger =
    use_mut_ref(RequestLedger::default);

  {
    let ledger = ledger.clone();
    let tasks = tasks.clone();
    let snapshot_seq =
      snapshot_seq.clone();
    let error_line =
      error_line.clone();
    let base =
      props.config.api_base.clone();

    use_effect_with((), move |_| {
      tracing::info!(
        "requesting initial task \
         status"
      );
      dispatch(
        "initial-refresh",
        ledger,
        tasks,
        snapshot_seq,
        error_line,
        async move {
          api::refresh_status(&base)
            .await
        }
      );
      || ()
    });
  }

  let on_run = {
    let ledger = ledger.clone();
    let tasks = tasks.clone();
    let snapshot_seq =
      snapshot_seq.clone();
    let error_line =
      error_line.clone();
    let extra_args =
      extra_args.clone();
    let base =
      props.config.api_base.clone();

    Callback::from(
      move |sifter: String| {
        let args = RunSifterArgs {
          sifter:     sifter.clone(),
          extra_args: (*extra_args)
            .get(&sifter)
            .cloned()
            .unwrap_or_default()
        };
        let base = base.clone();

        dispatch(
          "run-sifter",
          ledger.clone(),
          tasks.clone(),
          snapshot_seq.clone(),
          error_line.clone(),
          async move {
            api::run_sifter(
              &base, &args
            )
            .await
          }
        );
      }
    )
  };

  let on_refresh = {
    let ledger = ledger.clone();
    let tasks = tasks.clone();
    let snapshot_seq =
      snapshot_seq.clone();
    let error_line =
      error_line.clone();
    let base =
      props.config.api_base.clone();

    Callback::from(
      move |_: MouseEvent| {
        let base = base.clone();

        dispatch(
          "refresh-status",
          ledger.clone(),
          tasks.clone(),
          snapshot_seq.clone(),
          error_line.clone(),
          async move {
            api::refresh_status(&base)
              .await
          }
        );
      }
    )
  };

  let on_clear = {
    let ledger = ledger.clone();
    let tasks = tasks.clone();
    let snapshot_seq =
      snapshot_seq.clone();
    let error_line =
      error_line.clone();
    let base =
      props.config.api_base.clone();

    Callback::from(
      move |_: MouseEvent| {
        let base = base.clone();

        dispatch(
          "clear-completed",
          ledger.clone(),
          tasks.clone(),
          snapshot_seq.clone(),
          error_line.clone(),
          async move {
            api::clear_completed(
              &base
            )
            .await
          }
        );
      }
    )
  };

  let on_extra_args = {
    let extra_args =
      extra_args.clone();

    Callback::from(
      move |(sifter, value): (
        String,
        String
      )| {
        let mut current =
          (*extra_args).clone();
        current.insert(sifter, value);
        extra_args.set(current);
      }
    )
  };

  let on_inspect = {
    let open_failure =
      open_failure.clone();

    Callback::from(
      move |id: TaskId| {
        tracing::debug!(
          task_id = %id,
          "opening failure detail"
        );
        open_failure.set(Some(id));
      }
    )
  };

  let on_dismiss = {
    let open_failure =
      open_failure.clone();

    Callback::from(
      move |_: MouseEvent| {
        open_failure.set(None);
      }
    )
  };

  let rows =
    projection::project(&tasks);

  // Detail text is resolved from the current
  // snapshot at render time; if a refresh drops the
  // failing task, the dialog closes with it.
  let failure_text = (*open_failure)
    .as_ref()
    .and_then(|id| {
      projection::failure_detail(
        &tasks, id
      )
      .map(str::to_string)
    });

  html! {
      <div class="console">
          <div class="controls">
              <SifterControls
                  sifters={props.config.sifters.clone()}
                  extra_args={(*extra_args).clone()}
                  on_change={on_extra_args}
                  on_run={on_run}
              />
              <TaskActions
                  on_refresh={on_refresh}
                  on_clear={on_clear}
              />
          </div>
          <ErrorBanner line={(*error_line).clone()} />
          <TaskTable
              rows={rows}
              snapshot={*snapshot_seq}
              on_inspect={on_inspect}
          />
          {
              if let Some(text) = failure_text {
                  html! { <FailureModal detail={text} on_dismiss={on_dismiss} /> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
