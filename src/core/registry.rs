//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 백엔드 서비스를 위한 싱글톤 기반 의존성 주입 컨테이너입니다.
//! Spring Framework의 ApplicationContext 역할을 Rust에서 구현한 것으로,
//! 컴파일 타임 타입 안전성과 런타임 효율성을 모두 제공합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `ApplicationContext` | `ServiceLocator` | 전역 DI 컨테이너 |
//! | `registerSingleton()` | `ServiceLocator::set()` | 수동 컴포넌트 등록 |
//! | `getBean(Class<T>)` | `ServiceLocator::get::<T>()` | 타입 기반 조회 |
//! | `@PostConstruct` | `Service::init()` | 초기화 훅 |
//! | `@Scope("singleton")` | 기본 동작 | 모든 컴포넌트가 싱글톤 |
//!
//! ## 동작 방식
//!
//! 1. **등록**: 애플리케이션 부트스트랩(`main`)에서 컴포넌트를 생성하고
//!    `ServiceLocator::set()` 으로 전역 컨테이너에 저장합니다.
//! 2. **초기화**: `Service` trait을 구현한 컴포넌트는 등록 전에 `init()` 을
//!    호출하여 필요한 준비 작업을 수행합니다.
//! 3. **조회**: 핸들러 등 어디서든 `ServiceLocator::get::<T>()` 로 동일한
//!    `Arc<T>` 인스턴스를 얻습니다 (`TypeId` 기반 O(1) 조회).
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//! use crate::services::signup::SignUpService;
//!
//! // main.rs에서 등록
//! let service = Arc::new(SignUpService::default());
//! service.init().await?;
//! ServiceLocator::set(service);
//!
//! // 핸들러에서 조회 (항상 동일한 인스턴스)
//! let service = ServiceLocator::get::<SignUpService>();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use log::info;
use once_cell::sync::Lazy;

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 애플리케이션 부트스트랩 시점에 등록되는 서비스들이 구현하는 trait입니다.
/// 서비스의 기본 메타데이터와 생명주기 관리를 담당합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름을 반환합니다.
    ///
    /// 로그와 초기화 메시지에서 서비스를 식별하는 데 사용됩니다.
    fn name(&self) -> &str;

    /// 서비스 초기화 로직을 수행합니다.
    ///
    /// 이 메서드는 서비스가 컨테이너에 등록되기 전에 호출되며,
    /// 필요한 초기 설정이나 리소스 준비 작업을 수행할 수 있습니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 싱글톤 의존성 주입 컨테이너
///
/// 생성된 인스턴스들을 `TypeId` 키로 보관하는 전역 컨테이너입니다.
/// `RwLock`으로 보호되어 여러 워커 스레드에서 안전하게 조회할 수 있으며,
/// 각 타입당 정확히 하나의 인스턴스만 유지합니다.
pub struct ServiceLocator {
    /// 생성된 인스턴스들의 캐시
    /// `TypeId`를 키로 사용하여 각 타입당 하나의 인스턴스를 저장
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    /// 새로운 ServiceLocator 인스턴스를 생성합니다.
    /// 전역 Lazy static에서만 호출됩니다.
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// Spring의 `registerSingleton()`과 동일한 역할을 하며, 부트스트랩
    /// 시점에 구성 완료된 컴포넌트를 전역 컨테이너에 저장합니다.
    /// 동일 타입을 다시 등록하면 기존 인스턴스를 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();
        let clean_name = Self::extract_clean_type_name(type_name);

        info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// Spring의 `ApplicationContext.getBean(Class<T>)`과 동일한 역할입니다.
    ///
    /// # 패닉 상황
    ///
    /// 등록되지 않은 타입을 요청하면 명확한 해결 방법과 함께 패닉을
    /// 발생시켜 구성 문제를 조기에 발견합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_name = std::any::type_name::<T>();

        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "Service not found: {}. Make sure it's registered with ServiceLocator::set() during bootstrap",
                type_name
            )
        })
    }

    /// 지정된 타입의 인스턴스를 조회하고, 없으면 `None`을 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let type_id = TypeId::of::<T>();

        let instances = LOCATOR.instances.read().unwrap();
        instances.get(&type_id).map(|instance| {
            instance
                .clone()
                .downcast::<T>()
                .expect("Type mismatch in ServiceLocator")
        })
    }

    /// 타입 이름에서 실제 타입 이름을 추출합니다.
    ///
    /// Rust의 `std::any::type_name::<T>()`는 전체 모듈 경로를 포함하므로
    /// (예: `signup_service_backend::services::signup::SignUpService`),
    /// 실제 타입 이름만 추출하여 로그에 사용합니다.
    fn extract_clean_type_name(type_name: &str) -> String {
        if let Some(pos) = type_name.rfind("::") {
            type_name[pos + 2..].to_string()
        } else {
            type_name.to_string()
        }
    }
}

/// 전역 서비스 로케이터 인스턴스
///
/// 애플리케이션 전체에서 사용되는 유일한 ServiceLocator 인스턴스입니다.
/// `Lazy<T>`를 사용하여 첫 접근 시에만 초기화되며, 이후에는 동일한
/// 인스턴스가 재사용됩니다.
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyComponent {
        value: u32,
    }

    #[test]
    fn test_set_and_get_returns_same_instance() {
        let component = Arc::new(DummyComponent { value: 42 });
        ServiceLocator::set(component.clone());

        let first = ServiceLocator::get::<DummyComponent>();
        let second = ServiceLocator::get::<DummyComponent>();

        assert_eq!(first.value, 42);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_try_get_unregistered_type_returns_none() {
        struct NeverRegistered;

        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("crate::services::signup::SignUpService"),
            "SignUpService"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Plain"), "Plain");
    }
}
