use serde::Deserialize;
use sqlx::PgPool;

use super::{ensure_id, interpret, interpret_created, Mutation, ServiceError};
use crate::auth::Role;
use crate::database::models::{Assignment, Student, StudentInput, StudentProgress};
use crate::database::repository::assignments::AssignmentFilter;
use crate::database::repository::{AssignmentRepository, StudentRepository};
use crate::error::FieldErrors;
use crate::middleware::{AuthUser, Validate, Validator};

impl Validate for StudentInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .required("first_names", &self.first_names)
            .max_len("first_names", &self.first_names, 100)
            .required("last_names", &self.last_names)
            .max_len("last_names", &self.last_names, 100)
            .national_id("national_id", &self.national_id)
            .email("email", &self.email)
            .phone("phone", self.phone.as_deref())
            .positive("faculty_id", self.faculty_id)
            .range("semester", self.semester, 1, 12)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentQuery {
    pub faculty_id: Option<i32>,
    pub active: Option<bool>,
}

pub struct StudentService {
    students: StudentRepository,
    assignments: AssignmentRepository,
}

impl StudentService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            students: StudentRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool),
        }
    }

    pub async fn list(&self, query: &StudentQuery) -> Result<Vec<Student>, ServiceError> {
        if let Some(faculty_id) = query.faculty_id {
            ensure_id("faculty_id", faculty_id)?;
        }
        Ok(self.students.select_any(query.faculty_id, query.active).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Student, ServiceError> {
        let id = ensure_id("id", id)?;
        Ok(self.students.select_404(id).await?)
    }

    pub async fn create(&self, input: &StudentInput) -> Result<Mutation, ServiceError> {
        let input = normalize(input);
        interpret_created(self.students.create(&input).await?)
    }

    /// Identity changes cascade inside the database (e.g. email on linked records)
    pub async fn update(&self, id: i32, input: &StudentInput) -> Result<Mutation, ServiceError> {
        let id = ensure_id("id", id)?;
        let input = normalize(input);
        interpret(self.students.update(id, &input).await?)
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<Mutation, ServiceError> {
        let id = ensure_id("id", id)?;
        interpret(self.students.set_active(id, active).await?)
    }

    /// Trainers only see the student's assignments that belong to them
    pub async fn assignments(&self, user: &AuthUser, id: i32) -> Result<Vec<Assignment>, ServiceError> {
        let id = ensure_id("id", id)?;
        let filter = assignments_filter(user, id)?;
        // 404 for unknown students instead of an empty list
        self.students.select_404(id).await?;
        Ok(self.assignments.select_any(filter).await?)
    }

    pub async fn progress(&self, id: i32) -> Result<Vec<StudentProgress>, ServiceError> {
        let id = ensure_id("id", id)?;
        self.students.select_404(id).await?;
        Ok(self.students.progress(id).await?)
    }
}

fn normalize(input: &StudentInput) -> StudentInput {
    StudentInput {
        first_names: input.first_names.trim().to_string(),
        last_names: input.last_names.trim().to_string(),
        national_id: input.national_id.trim().to_string(),
        email: input.email.trim().to_lowercase(),
        phone: input
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        faculty_id: input.faculty_id,
        semester: input.semester,
    }
}

fn assignments_filter(user: &AuthUser, student_id: i32) -> Result<AssignmentFilter, ServiceError> {
    let trainer_id = match user.role {
        Role::Admin => None,
        Role::Trainer => Some(
            user.trainer_id
                .ok_or_else(|| ServiceError::Forbidden("No trainer profile linked to this account".into()))?,
        ),
    };
    Ok(AssignmentFilter {
        status: None,
        trainer_id,
        student_id: Some(student_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, trainer_id: Option<i32>) -> AuthUser {
        AuthUser {
            user_id: 10,
            trainer_id,
            name: "Carlos Mendoza".into(),
            email: "carlos@uleam.edu.ec".into(),
            role,
        }
    }

    #[test]
    fn trainers_see_only_their_assignments_of_a_student() {
        let filter = assignments_filter(&user(Role::Trainer, Some(4)), 3).unwrap();
        assert_eq!(filter.trainer_id, Some(4));
        assert_eq!(filter.student_id, Some(3));

        let filter = assignments_filter(&user(Role::Admin, None), 3).unwrap();
        assert_eq!(filter.trainer_id, None);
        assert_eq!(filter.student_id, Some(3));

        assert!(matches!(
            assignments_filter(&user(Role::Trainer, None), 3),
            Err(ServiceError::Forbidden(_))
        ));
    }

    fn valid_student() -> StudentInput {
        StudentInput {
            first_names: "María José".into(),
            last_names: "Zambrano Cedeño".into(),
            national_id: "1312345678".into(),
            email: "MJ.Zambrano@uleam.edu.ec ".into(),
            phone: Some(" ".into()),
            faculty_id: 2,
            semester: 5,
        }
    }

    #[test]
    fn valid_student_passes() {
        assert!(valid_student().validate().is_ok());
    }

    #[test]
    fn reports_every_bad_field() {
        let input = StudentInput {
            national_id: "12AB".into(),
            faculty_id: 0,
            semester: 13,
            ..valid_student()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["faculty_id", "national_id", "semester"]
        );
    }

    #[test]
    fn normalizes_before_storage() {
        let input = normalize(&valid_student());
        assert_eq!(input.email, "mj.zambrano@uleam.edu.ec");
        assert_eq!(input.phone, None);
    }
}
