use quickclick_domain::advert::Category;
use quickclick_marketplace::domain::dto::AdvertCreateDto;
use quickclick_marketplace::error::MarketplaceError;
use quickclick_marketplace::usecase::advert_registration::RegisterAdvertUseCase;

use crate::helpers::{MockAdvertRepo, MockUserRepo, caller, create_dto, test_user};

#[tokio::test]
async fn should_register_advert_for_resolved_user() {
    let user = test_user(1, "alice@example.com");
    let adverts = MockAdvertRepo::empty();
    let saves = adverts.saves.clone();
    let usecase = RegisterAdvertUseCase {
        adverts,
        users: MockUserRepo::new(vec![user.clone()]),
    };

    let advert = usecase.execute(create_dto(), &caller(&user)).await.unwrap();

    assert_eq!(advert.title, "Big dog");
    assert_eq!(advert.category, Category::Toys);
    assert_eq!(advert.user_id, user.id);
    assert_eq!(saves.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_fail_before_saving_when_user_unknown() {
    let user = test_user(1, "alice@example.com");
    let adverts = MockAdvertRepo::empty();
    let saves = adverts.saves.clone();
    let usecase = RegisterAdvertUseCase {
        adverts,
        users: MockUserRepo::empty(),
    };

    let result = usecase.execute(create_dto(), &caller(&user)).await;

    assert!(
        matches!(
            result,
            Err(MarketplaceError::ResourceNotFound { resource: "User", .. })
        ),
        "expected ResourceNotFound, got {result:?}"
    );
    assert!(saves.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_not_save_when_conversion_fails() {
    let user = test_user(1, "alice@example.com");
    let adverts = MockAdvertRepo::empty();
    let saves = adverts.saves.clone();
    let usecase = RegisterAdvertUseCase {
        adverts,
        users: MockUserRepo::new(vec![user.clone()]),
    };
    let dto = AdvertCreateDto {
        category: "spaceships".to_owned(),
        ..create_dto()
    };

    let err = usecase.execute(dto, &caller(&user)).await.unwrap_err();

    assert!(matches!(err, MarketplaceError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "There is no such category: spaceships");
    assert!(saves.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_blank_description_without_saving() {
    let user = test_user(1, "alice@example.com");
    let adverts = MockAdvertRepo::empty();
    let saves = adverts.saves.clone();
    let usecase = RegisterAdvertUseCase {
        adverts,
        users: MockUserRepo::new(vec![user.clone()]),
    };
    let dto = AdvertCreateDto {
        description: Some(String::new()),
        ..create_dto()
    };

    let result = usecase.execute(dto, &caller(&user)).await;

    assert!(matches!(result, Err(MarketplaceError::AdvertRegistration(_))));
    assert!(saves.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_propagate_save_failure() {
    let user = test_user(1, "alice@example.com");
    let usecase = RegisterAdvertUseCase {
        adverts: MockAdvertRepo::failing_save(),
        users: MockUserRepo::new(vec![user.clone()]),
    };

    let result = usecase.execute(create_dto(), &caller(&user)).await;

    assert!(matches!(result, Err(MarketplaceError::Internal(_))));
}
