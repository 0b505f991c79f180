// Copyright 2025 Ricardo Arguello and Misael Fernández. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use std::fmt::{self, Display, Formatter};

use crate::{
    log_item,
    validation_codes::{EXTENSION_MALFORMED, EXTENSION_PRESENT},
    ErrorBehavior, StatusTracker,
};

#[test]
fn stop_on_first_error_is_default() {
    let mut tracker = StatusTracker::default();
    assert_eq!(tracker.error_behavior(), &ErrorBehavior::StopOnFirstError);

    let err = log_item!("business_name", "extension malformed", "test func")
        .validation_status(EXTENSION_MALFORMED)
        .failure(&mut tracker, SampleError {})
        .unwrap_err();

    assert_eq!(err.to_string(), "SampleError");
    assert_eq!(tracker.logged_items().len(), 1);
    assert!(tracker.has_status(EXTENSION_MALFORMED));
}

#[test]
fn continue_when_possible_aggregates_errors() {
    let mut tracker = StatusTracker::with_error_behavior(ErrorBehavior::ContinueWhenPossible);

    log_item!("national_id", "extension present", "test func")
        .validation_status(EXTENSION_PRESENT)
        .success(&mut tracker);

    log_item!("business_name", "extension malformed", "test func")
        .failure(&mut tracker, SampleError {})
        .unwrap();

    log_item!("tax_id", "extension malformed", "test func")
        .failure(&mut tracker, SampleError {})
        .unwrap();

    assert_eq!(tracker.logged_items().len(), 3);
    assert_eq!(tracker.filter_errors().count(), 2);
    assert!(tracker.has_status(EXTENSION_PRESENT));
    assert!(!tracker.has_status(EXTENSION_MALFORMED));
}

#[derive(Debug)]
struct SampleError {}

impl Display for SampleError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "SampleError")
    }
}
