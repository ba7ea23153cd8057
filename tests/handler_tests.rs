use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use chrono::Utc;
use mockall::mock;
use portfolio_site::{
    entities::{
        contact::{ContactSubmission, NewContactSubmission},
        experience::{Experience, ExperienceType, NewExperience},
        project::{NewProject, Project, ProjectCategory},
        user::{NewUser, User, UserInsert},
    },
    errors::AppError,
    repositories::{
        contact::ContactRepository, experience::ExperienceRepository,
        project::ProjectRepository, user::UserRepository,
    },
    use_cases::{
        account::AccountHandler, contact::ContactHandler, experience::ExperienceHandler,
        project::ProjectHandler,
    },
};
use uuid::Uuid;

mock! {
    pub ContactRepo {}

    #[async_trait::async_trait]
    impl ContactRepository for ContactRepo {
        async fn create_contact_submission(&self, submission: NewContactSubmission) -> Result<ContactSubmission, AppError>;
        async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>, AppError>;
    }
}

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn get_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn get_projects_by_category(&self, category: ProjectCategory) -> Result<Vec<Project>, AppError>;
        async fn get_featured_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn get_project(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
        async fn create_project(&self, project: NewProject) -> Result<Project, AppError>;
    }
}

mock! {
    pub ExperienceRepo {}

    #[async_trait::async_trait]
    impl ExperienceRepository for ExperienceRepo {
        async fn get_experiences(&self) -> Result<Vec<Experience>, AppError>;
        async fn get_experiences_by_type(&self, kind: ExperienceType) -> Result<Vec<Experience>, AppError>;
        async fn create_experience(&self, experience: NewExperience) -> Result<Experience, AppError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait::async_trait]
    impl UserRepository for UserRepo {
        async fn get_user(&self, id: &Uuid) -> Result<Option<User>, AppError>;
        async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
        async fn create_user(&self, user: UserInsert) -> Result<User, AppError>;
    }
}

fn password_matches(password: &str, hash: &str) -> bool {
    let parsed = PasswordHash::new(hash).expect("stored hash is a PHC string");
    Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
}

fn contact_form(email: &str) -> NewContactSubmission {
    NewContactSubmission {
        name: "A".to_string(),
        email: email.to_string(),
        subject: "S".to_string(),
        message: "M".to_string(),
    }
}

fn project_form(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: "Small demo".to_string(),
        long_description: None,
        category: ProjectCategory::Web,
        technologies: vec!["Rust".to_string()],
        features: None,
        tags: None,
        github_url: Some("https://github.com/example/demo".to_string()),
        demo_url: None,
        image_url: None,
        featured: false,
    }
}

#[tokio::test]
async fn contact_handler_passes_valid_form_to_repository() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_submission()
        .withf(|form| form.email == "a@b.com")
        .times(1)
        .returning(|form| Ok(form.into_submission(Uuid::new_v4(), Utc::now())));

    let handler = ContactHandler::new(repo);
    let created = handler
        .create_contact_submission(contact_form("a@b.com"))
        .await
        .unwrap();

    assert_eq!(created.email, "a@b.com");
    assert_eq!(created.name, "A");
}

#[tokio::test]
async fn contact_handler_never_stores_invalid_form() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_submission().never();

    let handler = ContactHandler::new(repo);

    for email in ["", "not-an-email"] {
        let result = handler.create_contact_submission(contact_form(email)).await;
        match result {
            Err(AppError::ValidationError(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "email");
            }
            other => panic!("expected validation error for {:?}, got {:?}", email, other),
        }
    }
}

#[tokio::test]
async fn contact_handler_rejects_blank_message() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_submission().never();

    let handler = ContactHandler::new(repo);
    let mut form = contact_form("a@b.com");
    form.message = " \n ".to_string();

    match handler.create_contact_submission(form).await {
        Err(AppError::ValidationError(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "message");
            assert_eq!(errors[0].message, "Must not be blank");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn contact_handler_propagates_repository_errors() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_submission()
        .returning(|_| Err(AppError::InternalError("store unavailable".to_string())));

    let handler = ContactHandler::new(repo);
    let result = handler.create_contact_submission(contact_form("a@b.com")).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
}

#[tokio::test]
async fn project_handler_rejects_blank_title_before_storage() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().never();

    let handler = ProjectHandler::new(repo);
    let result = handler.create_project(project_form("")).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn project_handler_forwards_category_and_id_lookups() {
    let wanted = Uuid::new_v4();
    let mut repo = MockProjectRepo::new();
    repo.expect_get_projects_by_category()
        .withf(|category| *category == ProjectCategory::Ai)
        .times(1)
        .returning(|_| Ok(Vec::new()));
    repo.expect_get_project()
        .withf(move |id| *id == wanted)
        .times(1)
        .returning(|_| Ok(None));

    let handler = ProjectHandler::new(repo);

    assert!(handler.get_projects_by_category(ProjectCategory::Ai).await.unwrap().is_empty());
    assert!(handler.get_project(&wanted).await.unwrap().is_none());
}

#[tokio::test]
async fn experience_handler_rejects_missing_description() {
    let mut repo = MockExperienceRepo::new();
    repo.expect_create_experience().never();

    let handler = ExperienceHandler::new(repo);
    let result = handler
        .create_experience(NewExperience {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            start_date: "2021".to_string(),
            end_date: None,
            description: Vec::new(),
            technologies: None,
            kind: ExperienceType::Work,
        })
        .await;

    match result {
        Err(AppError::ValidationError(errors)) => assert_eq!(errors[0].field, "description"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn account_handler_stores_only_the_password_hash() {
    let mut repo = MockUserRepo::new();
    repo.expect_create_user()
        .withf(|insert| insert.username == "owner" && insert.password_hash != "hunter2hunter2")
        .times(1)
        .returning(|insert| Ok(insert.into_user(Uuid::new_v4())));

    let handler = AccountHandler::new(repo);
    let user = handler
        .create_user(NewUser {
            username: "owner".to_string(),
            password: "hunter2hunter2".to_string(),
        })
        .await
        .unwrap();

    assert!(password_matches("hunter2hunter2", &user.password_hash));
}

#[tokio::test]
async fn account_handler_surfaces_username_conflict() {
    let mut repo = MockUserRepo::new();
    repo.expect_create_user()
        .returning(|_| Err(AppError::Conflict("User with this username already exists".to_string())));

    let handler = AccountHandler::new(repo);
    let result = handler
        .create_user(NewUser {
            username: "owner".to_string(),
            password: "long enough".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn account_handler_lookup_by_username() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_username()
        .withf(|name| name == "nobody")
        .returning(|_| Ok(None));

    let handler = AccountHandler::new(repo);

    assert!(handler.get_user_by_username("nobody").await.unwrap().is_none());
}
