// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

/// Formats a playback time as `mm:ss`. Minutes keep counting past 99.
pub fn format_time(time: Duration) -> String {
    let total_secs = time.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

pub trait ResultExt<E> {
    type Ok;

    fn log_err(self) -> Option<Self::Ok>;
}

impl<T, E> ResultExt<E> for Result<T, E>
where
    E: std::fmt::Debug,
{
    type Ok = T;

    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let loc = std::panic::Location::caller();
                tracing::error!(
                    error = ?error,
                    caller.file = %loc.file(),
                    caller.line = loc.line(),
                    "player error"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, "00:00")]
    #[test_case(9, "00:09")]
    #[test_case(75, "01:15")]
    #[test_case(3599, "59:59")]
    #[test_case(6000, "100:00")]
    fn test_format_time(secs: u64, expected: &str) {
        assert_eq!(format_time(Duration::from_secs(secs)), expected);
    }

    #[test]
    fn test_format_time_truncates_fraction() {
        assert_eq!(format_time(Duration::from_millis(59_999)), "00:59");
    }
}
