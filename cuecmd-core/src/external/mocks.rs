// cuecmd-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::CueExecutor;
use crate::command::Invocation;
use crate::error::{CoreError, CoreResult};
use crate::outcome::Outcome;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Scripted reply for one call to [`MockExecutor::execute`].
pub enum MockResponse {
    Exit {
        exit_code: i32,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
    SpawnError(CoreError),
}

/// Executor that records invocations and replays scripted responses in order.
#[derive(Clone, Default)]
pub struct MockExecutor {
    responses: Rc<RefCell<VecDeque<MockResponse>>>,
    received_calls: Rc<RefCell<Vec<Invocation>>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_response(&self, response: MockResponse) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn add_success(&self, stdout: &str) {
        self.add_response(MockResponse::Exit {
            exit_code: 0,
            stdout: stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        });
    }

    pub fn add_exit_error(&self, exit_code: i32, stderr: &str) {
        self.add_response(MockResponse::Exit {
            exit_code,
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
        });
    }

    pub fn add_spawn_error(&self, error: CoreError) {
        self.add_response(MockResponse::SpawnError(error));
    }

    pub fn get_received_calls(&self) -> Vec<Invocation> {
        self.received_calls.borrow().clone()
    }
}

impl CueExecutor for MockExecutor {
    fn execute(&self, invocation: &Invocation) -> CoreResult<Outcome> {
        self.received_calls.borrow_mut().push(invocation.clone());

        let response = self.responses.borrow_mut().pop_front();
        match response {
            Some(MockResponse::Exit {
                exit_code,
                stdout,
                stderr,
            }) => Ok(Outcome {
                args: invocation.argv("cue"),
                exit_code,
                stdout,
                stderr,
                input: invocation.input.clone(),
            }),
            Some(MockResponse::SpawnError(err)) => Err(err),
            None => {
                log::error!("MockExecutor: no response scripted for {:?}", invocation.args);
                panic!("MockExecutor: no response scripted for {:?}", invocation.args);
            }
        }
    }
}
