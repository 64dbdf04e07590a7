//! Repository layer — entity-scoped database operations.
//!
//! Free functions over an explicit `&Connection` handle, one sub-module per
//! entity. No global store instances: tests pass an in-memory database, the
//! app passes the connection opened from `AppState`.

mod appointment;
mod client;
mod schedule;
mod staff;

pub use appointment::*;
pub use client::*;
pub use schedule::*;
pub use staff::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use rusqlite::Connection;

    use crate::db::sqlite::open_memory_database;
    use crate::db::DatabaseError;
    use crate::models::*;

    fn test_db() -> Connection {
        open_memory_database().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn make_staff(conn: &Connection) -> i64 {
        insert_staff(
            conn,
            &NewStaff {
                name: "Marco".into(),
                surname: "Caruso".into(),
                specialties: "Dermatology".into(),
            },
        )
        .unwrap()
    }

    fn make_client(conn: &Connection) -> i64 {
        insert_client(
            conn,
            &NewClient {
                name: "Anna".into(),
                surname: "Rossi".into(),
                phone: None,
                email: None,
            },
        )
        .unwrap()
    }

    fn make_schedule(conn: &Connection, staff_id: i64, day: NaiveDate) -> i64 {
        insert_schedule(
            conn,
            &NewSchedule {
                day,
                start_time: time(9, 0),
                stop_time: time(17, 0),
                staff_id,
            },
        )
        .unwrap()
    }

    #[test]
    fn staff_insert_and_retrieve() {
        let conn = test_db();
        let id = make_staff(&conn);
        let staff = get_staff(&conn, id).unwrap().unwrap();
        assert_eq!(staff.name, "Marco");
        assert_eq!(staff.surname, "Caruso");
        assert!(staff.fired_date.is_none());
    }

    #[test]
    fn staff_list_filters_by_substring() {
        let conn = test_db();
        make_staff(&conn);
        insert_staff(
            &conn,
            &NewStaff {
                name: "Federico".into(),
                surname: "Silvi".into(),
                specialties: "Massage".into(),
            },
        )
        .unwrap();

        let by_specialty = list_staff(
            &conn,
            &StaffFilter {
                specialties: Some("Derma".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(by_specialty.len(), 1);
        assert_eq!(by_specialty[0].name, "Marco");

        let all = list_staff(&conn, &StaffFilter::default()).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn staff_update_roundtrip() {
        let conn = test_db();
        let id = make_staff(&conn);
        let mut staff = get_staff(&conn, id).unwrap().unwrap();
        staff.specialties = "Dermatology, Massage".into();
        update_staff(&conn, &staff).unwrap();

        let updated = get_staff(&conn, id).unwrap().unwrap();
        assert_eq!(updated.specialties, "Dermatology, Massage");
    }

    #[test]
    fn staff_update_missing_is_not_found() {
        let conn = test_db();
        let err = update_staff(
            &conn,
            &Staff {
                id: 999,
                name: "X".into(),
                surname: "Y".into(),
                specialties: "".into(),
                fired_date: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[test]
    fn fired_staff_leaves_listings() {
        let conn = test_db();
        let id = make_staff(&conn);
        fire_staff(&conn, id, date(2024, 5, 1)).unwrap();

        let active = list_staff(&conn, &StaffFilter::default()).unwrap();
        assert!(active.is_empty());

        // Still on record, with the firing date set
        let staff = get_staff(&conn, id).unwrap().unwrap();
        assert_eq!(staff.fired_date, Some(date(2024, 5, 1)));

        let fired = list_fired_before(&conn, date(2024, 6, 1)).unwrap();
        assert_eq!(fired.len(), 1);
        let fired_later = list_fired_before(&conn, date(2024, 4, 1)).unwrap();
        assert!(fired_later.is_empty());
    }

    #[test]
    fn staff_hard_delete_cascades_schedules() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        make_schedule(&conn, staff_id, date(2024, 11, 24));

        delete_staff(&conn, staff_id).unwrap();

        assert!(get_staff(&conn, staff_id).unwrap().is_none());
        let schedules = list_schedules(&conn, &ScheduleFilter::default()).unwrap();
        assert!(schedules.is_empty());
    }

    #[test]
    fn schedule_insert_and_retrieve() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        let id = make_schedule(&conn, staff_id, date(2024, 11, 24));

        let schedule = get_schedule(&conn, id).unwrap().unwrap();
        assert_eq!(schedule.day, date(2024, 11, 24));
        assert_eq!(schedule.start_time, time(9, 0));
        assert_eq!(schedule.stop_time, time(17, 0));
        assert_eq!(schedule.staff_id, staff_id);
    }

    #[test]
    fn schedule_insert_unknown_staff_is_business_rule_violation() {
        let conn = test_db();
        let err = insert_schedule(
            &conn,
            &NewSchedule {
                day: date(2024, 11, 24),
                start_time: time(9, 0),
                stop_time: time(17, 0),
                staff_id: 42,
            },
        )
        .unwrap_err();
        assert!(matches!(err, DatabaseError::ConstraintViolation(_)));
    }

    #[test]
    fn schedule_insert_inverted_window_rejected() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        let err = insert_schedule(
            &conn,
            &NewSchedule {
                day: date(2024, 11, 24),
                start_time: time(17, 0),
                stop_time: time(9, 0),
                staff_id,
            },
        )
        .unwrap_err();
        assert!(matches!(err, DatabaseError::ConstraintViolation(_)));
    }

    #[test]
    fn schedule_filter_combinations() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        make_schedule(&conn, staff_id, date(2024, 11, 24));
        insert_schedule(
            &conn,
            &NewSchedule {
                day: date(2024, 11, 25),
                start_time: time(13, 0),
                stop_time: time(18, 0),
                staff_id,
            },
        )
        .unwrap();

        let by_day = list_schedules(
            &conn,
            &ScheduleFilter {
                day: Some(date(2024, 11, 25)),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(by_day.len(), 1);
        assert_eq!(by_day[0].start_time, time(13, 0));

        let late_start = list_schedules(
            &conn,
            &ScheduleFilter {
                start_from: Some(time(10, 0)),
                staff_id: Some(staff_id),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(late_start.len(), 1);
        assert_eq!(late_start[0].day, date(2024, 11, 25));

        let all = list_schedules(&conn, &ScheduleFilter::default()).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn schedule_update_touches_one_window() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        let first = make_schedule(&conn, staff_id, date(2024, 11, 24));
        let second = make_schedule(&conn, staff_id, date(2024, 11, 25));

        let mut schedule = get_schedule(&conn, first).unwrap().unwrap();
        schedule.stop_time = time(13, 0);
        update_schedule(&conn, &schedule).unwrap();

        assert_eq!(
            get_schedule(&conn, first).unwrap().unwrap().stop_time,
            time(13, 0)
        );
        // The member's other window is untouched
        assert_eq!(
            get_schedule(&conn, second).unwrap().unwrap().stop_time,
            time(17, 0)
        );
    }

    #[test]
    fn schedule_delete_missing_is_not_found() {
        let conn = test_db();
        let err = delete_schedule(&conn, 7).unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[test]
    fn future_schedules_ordered_by_day_then_start() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        // Inserted out of order on purpose
        insert_schedule(
            &conn,
            &NewSchedule {
                day: date(2024, 11, 26),
                start_time: time(9, 0),
                stop_time: time(12, 0),
                staff_id,
            },
        )
        .unwrap();
        insert_schedule(
            &conn,
            &NewSchedule {
                day: date(2024, 11, 25),
                start_time: time(14, 0),
                stop_time: time(18, 0),
                staff_id,
            },
        )
        .unwrap();
        insert_schedule(
            &conn,
            &NewSchedule {
                day: date(2024, 11, 25),
                start_time: time(8, 0),
                stop_time: time(12, 0),
                staff_id,
            },
        )
        .unwrap();
        // In the past relative to `from` below
        insert_schedule(
            &conn,
            &NewSchedule {
                day: date(2024, 11, 20),
                start_time: time(9, 0),
                stop_time: time(17, 0),
                staff_id,
            },
        )
        .unwrap();

        let future = future_schedules(&conn, staff_id, date(2024, 11, 25)).unwrap();
        let order: Vec<(NaiveDate, NaiveTime)> =
            future.iter().map(|s| (s.day, s.start_time)).collect();
        assert_eq!(
            order,
            vec![
                (date(2024, 11, 25), time(8, 0)),
                (date(2024, 11, 25), time(14, 0)),
                (date(2024, 11, 26), time(9, 0)),
            ]
        );
    }

    #[test]
    fn availability_inside_and_outside_window() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        make_schedule(&conn, staff_id, date(2024, 11, 24));

        assert!(is_available(&conn, date(2024, 11, 24), time(10, 30), staff_id).unwrap());
        // Bounds are inclusive
        assert!(is_available(&conn, date(2024, 11, 24), time(9, 0), staff_id).unwrap());
        assert!(is_available(&conn, date(2024, 11, 24), time(17, 0), staff_id).unwrap());
        assert!(!is_available(&conn, date(2024, 11, 24), time(18, 0), staff_id).unwrap());
        // No window that day at all
        assert!(!is_available(&conn, date(2024, 11, 23), time(10, 0), staff_id).unwrap());
    }

    #[test]
    fn availability_with_split_windows() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        insert_schedule(
            &conn,
            &NewSchedule {
                day: date(2024, 11, 24),
                start_time: time(9, 0),
                stop_time: time(12, 0),
                staff_id,
            },
        )
        .unwrap();
        insert_schedule(
            &conn,
            &NewSchedule {
                day: date(2024, 11, 24),
                start_time: time(14, 0),
                stop_time: time(18, 0),
                staff_id,
            },
        )
        .unwrap();

        // A time inside either window counts as available
        assert!(is_available(&conn, date(2024, 11, 24), time(10, 0), staff_id).unwrap());
        assert!(is_available(&conn, date(2024, 11, 24), time(15, 0), staff_id).unwrap());
        // The gap between windows does not
        assert!(!is_available(&conn, date(2024, 11, 24), time(13, 0), staff_id).unwrap());
    }

    #[test]
    fn appointment_book_and_retrieve() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        let client_id = make_client(&conn);

        let id = book_appointment(
            &conn,
            &NewAppointment {
                service: "Massage".into(),
                duration_min: 60,
                day: date(2024, 11, 24),
                start_time: time(10, 0),
                client_id,
                staff_id,
            },
        )
        .unwrap();

        let appointment = get_appointment(&conn, id).unwrap().unwrap();
        assert_eq!(appointment.service, "Massage");
        assert_eq!(appointment.duration_min, 60);
        assert!(!appointment.canceled);
    }

    #[test]
    fn appointment_unknown_references_rejected() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        let client_id = make_client(&conn);

        let no_staff = book_appointment(
            &conn,
            &NewAppointment {
                service: "Massage".into(),
                duration_min: 60,
                day: date(2024, 11, 24),
                start_time: time(10, 0),
                client_id,
                staff_id: 99,
            },
        );
        assert!(matches!(
            no_staff.unwrap_err(),
            DatabaseError::ConstraintViolation(_)
        ));

        let no_client = book_appointment(
            &conn,
            &NewAppointment {
                service: "Massage".into(),
                duration_min: 60,
                day: date(2024, 11, 24),
                start_time: time(10, 0),
                client_id: 99,
                staff_id,
            },
        );
        assert!(matches!(
            no_client.unwrap_err(),
            DatabaseError::ConstraintViolation(_)
        ));
    }

    #[test]
    fn canceled_appointments_hidden_by_default() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        let client_id = make_client(&conn);
        let id = book_appointment(
            &conn,
            &NewAppointment {
                service: "Checkup".into(),
                duration_min: 30,
                day: date(2024, 11, 24),
                start_time: time(10, 0),
                client_id,
                staff_id,
            },
        )
        .unwrap();

        cancel_appointment(&conn, id).unwrap();

        let visible = list_appointments(&conn, &AppointmentFilter::default()).unwrap();
        assert!(visible.is_empty());

        let with_canceled = list_appointments(
            &conn,
            &AppointmentFilter {
                include_canceled: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(with_canceled.len(), 1);
        assert!(with_canceled[0].canceled);
    }

    #[test]
    fn cancel_missing_is_not_found() {
        let conn = test_db();
        let err = cancel_appointment(&conn, 5).unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[test]
    fn appointments_linked_to_schedule_window() {
        let conn = test_db();
        let staff_id = make_staff(&conn);
        let client_id = make_client(&conn);
        let schedule_id = make_schedule(&conn, staff_id, date(2024, 11, 24));
        let schedule = get_schedule(&conn, schedule_id).unwrap().unwrap();

        let inside = book_appointment(
            &conn,
            &NewAppointment {
                service: "Massage".into(),
                duration_min: 60,
                day: date(2024, 11, 24),
                start_time: time(10, 0),
                client_id,
                staff_id,
            },
        )
        .unwrap();
        // Same day, outside the window: starts exactly at stop time
        book_appointment(
            &conn,
            &NewAppointment {
                service: "Late".into(),
                duration_min: 30,
                day: date(2024, 11, 24),
                start_time: time(17, 0),
                client_id,
                staff_id,
            },
        )
        .unwrap();
        // Another day entirely
        book_appointment(
            &conn,
            &NewAppointment {
                service: "Elsewhere".into(),
                duration_min: 30,
                day: date(2024, 11, 25),
                start_time: time(10, 0),
                client_id,
                staff_id,
            },
        )
        .unwrap();

        let linked = appointments_for_schedule(&conn, &schedule).unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, inside);
    }

    #[test]
    fn client_insert_and_lookup() {
        let conn = test_db();
        let id = make_client(&conn);
        let client = get_client(&conn, id).unwrap().unwrap();
        assert_eq!(client.name, "Anna");
        assert!(client_exists(&conn, id).unwrap());
        assert!(!client_exists(&conn, id + 1).unwrap());
        assert_eq!(list_clients(&conn).unwrap().len(), 1);
    }

    #[test]
    fn store_failure_is_distinguishable_from_empty() {
        let conn = test_db();
        let staff_id = make_staff(&conn);

        // Zero results is Ok
        let none = future_schedules(&conn, staff_id, date(2024, 11, 24)).unwrap();
        assert!(none.is_empty());

        // A broken store surfaces as a SQLite error, not an empty list
        conn.execute_batch("DROP TABLE schedule").unwrap();
        let err = future_schedules(&conn, staff_id, date(2024, 11, 24)).unwrap_err();
        assert!(matches!(err, DatabaseError::Sqlite(_)));
    }
}
