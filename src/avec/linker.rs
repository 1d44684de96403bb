//! Threading of identifiers across the rows of one file.

use super::{
    dispatch::Row,
    rows::{Activity, Session, Tables},
};

/// State linking rows decoded from a single file.
///
/// The linker appends each row to its table, stamping it with the file's
/// source and the identifiers of the activity and session it belongs to.
/// Identifiers are counted from one, per file.
#[derive(Debug)]
pub struct Linker {
    file_source: String,
    /// Index of the current activity in the activities table.
    activity: Option<usize>,
    /// Whether the current activity has received a session summary.
    summarized: bool,
    /// Index of the current activity's first lap in the laps table.
    first_lap: usize,
    /// Index of the file's first record in the records table.
    first_record: Option<usize>,
    /// Sport of the latest session.
    sport: Option<String>,
    activities: u64,
    sessions: u32,
    laps: u32,
    devices: u32,
    events: u32,
    users: u32,
}

impl Linker {
    pub fn new(file_source: impl Into<String>) -> Self {
        Self {
            file_source: file_source.into(),
            activity: None,
            summarized: false,
            first_lap: 0,
            first_record: None,
            sport: None,
            activities: 0,
            sessions: 0,
            laps: 0,
            devices: 0,
            events: 0,
            users: 0,
        }
    }

    fn current_activity<'t>(&self, tables: &'t mut Tables) -> Option<&'t mut Activity> {
        tables.activities.get_mut(self.activity?)
    }

    fn activity_id(&self, tables: &Tables) -> Option<u64> {
        Some(tables.activities.get(self.activity?)?.activity_id)
    }

    /// Append a row to its table.
    pub fn link(&mut self, row: Row, tables: &mut Tables) {
        match row {
            Row::Record(mut record) => {
                self.first_record.get_or_insert(tables.records.len());
                record.file_source.clone_from(&self.file_source);
                tables.records.push(record);
            }

            Row::FileId(mut activity) => {
                self.activities += 1;
                activity.activity_id = activity.device_serial_number.unwrap_or(self.activities);
                activity.file_source.clone_from(&self.file_source);

                self.activity = Some(tables.activities.len());
                self.summarized = false;
                self.first_lap = tables.laps.len();
                tables.activities.push(activity);
            }

            Row::FileCreator { software_version } => {
                match (self.current_activity(tables), software_version) {
                    (Some(activity), Some(version)) => activity.software_version = version,
                    (None, _) => tracing::debug!("ignoring file creator before file id"),
                    _ => {}
                }
            }

            Row::Activity(summary) => {
                let Some(activity) = self.current_activity(tables) else {
                    tracing::debug!("ignoring activity message before file id");
                    return;
                };

                if summary.timestamp.is_some() {
                    activity.timestamp = summary.timestamp;
                }
                if summary.local_timestamp.is_some() {
                    activity.local_timestamp = summary.local_timestamp;
                }
                if summary.total_timer_time.is_some() {
                    activity.total_timer_time = summary.total_timer_time;
                }
            }

            Row::Session(mut session) => {
                self.sessions += 1;
                session.session_id = self.sessions;
                session.activity_id = self.activity_id(tables);
                session.file_source.clone_from(&self.file_source);

                if !session.sport.is_empty() {
                    self.sport = Some(session.sport.clone());
                }

                if let (Some(first), Some(count)) = (session.first_lap_index, session.num_laps) {
                    let laps = tables.laps[self.first_lap..]
                        .iter_mut()
                        .skip(first as usize)
                        .take(count as usize);

                    for lap in laps {
                        lap.session_id = Some(session.session_id);
                    }
                }

                if !self.summarized {
                    if let Some(activity) = self.current_activity(tables) {
                        summarize(activity, &session);
                        self.summarized = true;
                    }
                }

                tables.sessions.push(session);
            }

            Row::Lap(mut lap) => {
                self.laps += 1;
                lap.lap_id = self.laps;
                // Sessions follow their laps.
                lap.session_id = Some(self.sessions + 1);
                lap.activity_id = self.activity_id(tables);
                lap.file_source.clone_from(&self.file_source);
                tables.laps.push(lap);
            }

            Row::Device(mut device) => {
                self.devices += 1;
                device.device_id = self.devices;
                device.activity_id = self.activity_id(tables);
                device.file_source.clone_from(&self.file_source);
                tables.devices.push(device);
            }

            Row::Event(mut event) => {
                self.events += 1;
                event.event_id = self.events;
                event.activity_id = self.activity_id(tables);
                event.file_source.clone_from(&self.file_source);
                tables.events.push(event);
            }

            Row::User(mut user) => {
                self.users += 1;
                user.user_id = self.users;
                user.file_source.clone_from(&self.file_source);
                tables.users.push(user);
            }

            Row::Unknown(global) => {
                tracing::trace!(global, "dropping message outside the tables");
            }
        }
    }

    /// Apply the latest session's sport to every record of the file.
    pub fn finish(self, tables: &mut Tables) {
        if let (Some(sport), Some(first)) = (&self.sport, self.first_record) {
            for record in &mut tables.records[first..] {
                record.activity_type.clone_from(sport);
            }
        }

        tracing::debug!(
            file_source = %self.file_source,
            activities = self.activities,
            sessions = self.sessions,
            laps = self.laps,
            "linked file"
        );
    }
}

/// Copy a session's summary into its activity.
fn summarize(activity: &mut Activity, session: &Session) {
    activity.sport.clone_from(&session.sport);
    activity.sub_sport.clone_from(&session.sub_sport);

    activity.total_distance = session.total_distance;
    activity.total_calories = session.total_calories;
    activity.total_ascent = session.total_ascent;
    activity.total_descent = session.total_descent;
    activity.avg_heart_rate = session.avg_heart_rate;
    activity.max_heart_rate = session.max_heart_rate;
    activity.avg_speed = session.avg_speed;
    activity.max_speed = session.max_speed;
    activity.avg_power = session.avg_power;
    activity.max_power = session.max_power;
    activity.avg_cadence = session.avg_cadence;
    activity.max_cadence = session.max_cadence;
    activity.start_position_lat = session.start_position_lat;
    activity.start_position_long = session.start_position_long;
    activity.end_position_lat = session.end_position_lat;
    activity.end_position_long = session.end_position_long;

    activity.start_time = activity.start_time.or(session.start_time);
    activity.total_timer_time = activity.total_timer_time.or(session.total_timer_time);
    activity.total_elapsed_time = activity.total_elapsed_time.or(session.total_elapsed_time);
}
