//! API responses used by the integration tests

pub const APP_GUID: &str = "9902530c-c634-4864-a189-71d763cb12e2";
pub const SPACE_GUID: &str = "a72fa1e8-c694-47b3-85f2-55f61fd00d73";
pub const ORG_GUID: &str = "da0dba14-6064-4f7a-b15a-ff9e677e49b2";

pub const LIST_APPS_PAGE_1: &str = r#"{
  "total_results": 2,
  "total_pages": 2,
  "prev_url": null,
  "next_url": "/v2/appsPage2",
  "resources": [
    {
      "metadata": {
        "guid": "af15c29a-6bde-4a9b-8cdf-43aa0d4b7e3c",
        "url": "/v2/apps/af15c29a-6bde-4a9b-8cdf-43aa0d4b7e3c",
        "created_at": "2014-10-10T21:03:13+00:00",
        "updated_at": "2014-11-10T14:07:31+00:00"
      },
      "entity": {
        "name": "app-test",
        "production": false,
        "space_guid": "8efd7c5c-d83c-4786-b399-b7bd548839e1",
        "stack_guid": "2c531037-68a2-4e2c-a9e0-71f9d0abf0d4",
        "buildpack": "https://github.com/cloudfoundry/buildpack-go.git",
        "detected_buildpack": null,
        "detected_buildpack_guid": "0d22f6a1-76c5-417f-ac6c-d9d21463ecbc",
        "environment_json": {
          "FOOBAR": "QUX"
        },
        "memory": 256,
        "instances": 1,
        "disk_quota": 1024,
        "state": "STARTED",
        "version": "97ef1272-9eb6-4839-9df1-5ed4f55b5c45",
        "command": null,
        "console": false,
        "debug": null,
        "staging_task_id": "5879c8d06a10491a879734162000def8",
        "package_state": "PENDING",
        "health_check_http_endpoint": "",
        "health_check_type": "port",
        "health_check_timeout": null,
        "staging_failed_reason": null,
        "staging_failed_description": null,
        "diego": true,
        "docker_image": null,
        "docker_credentials_json": {
          "redacted_message": "[PRIVATE DATA HIDDEN]"
        },
        "package_updated_at": "2014-11-10T14:08:50+00:00",
        "detected_start_command": "app-launching-service-broker",
        "enable_ssh": true,
        "ports": [
          8080
        ],
        "space_url": "/v2/spaces/8efd7c5c-d83c-4786-b399-b7bd548839e1",
        "space": {
          "metadata": {
            "guid": "8efd7c5c-d83c-4786-b399-b7bd548839e1",
            "url": "/v2/spaces/8efd7c5c-d83c-4786-b399-b7bd548839e1",
            "created_at": "2014-09-24T13:54:54+00:00",
            "updated_at": null
          },
          "entity": {
            "name": "dev",
            "organization_guid": "a537761f-9d93-4b30-af17-3d73dbca181b",
            "allow_ssh": true,
            "organization_url": "/v2/organizations/a537761f-9d93-4b30-af17-3d73dbca181b",
            "organization": {
              "metadata": {
                "guid": "a537761f-9d93-4b30-af17-3d73dbca181b",
                "url": "/v2/organizations/a537761f-9d93-4b30-af17-3d73dbca181b",
                "created_at": "2014-09-24T13:54:53+00:00",
                "updated_at": null
              },
              "entity": {
                "name": "demo",
                "billing_enabled": false,
                "quota_definition_guid": "183599e0-d535-4559-8675-7b6ddb5cc32d",
                "status": "active"
              }
            }
          }
        },
        "stack_url": "/v2/stacks/2c531037-68a2-4e2c-a9e0-71f9d0abf0d4",
        "routes_url": "/v2/apps/af15c29a-6bde-4a9b-8cdf-43aa0d4b7e3c/routes"
      }
    }
  ]
}"#;

pub const LIST_APPS_PAGE_2: &str = r#"{
  "total_results": 2,
  "total_pages": 2,
  "prev_url": "/v2/apps?inline-relations-depth=2&page=1",
  "next_url": null,
  "resources": [
    {
      "metadata": {
        "guid": "f9ad202b-76dd-44ec-b7c2-fd2417a561e8",
        "url": "/v2/apps/f9ad202b-76dd-44ec-b7c2-fd2417a561e8",
        "created_at": "2014-10-10T21:03:13+00:00",
        "updated_at": "2014-11-10T14:07:31+00:00"
      },
      "entity": {
        "name": "app-test2",
        "space_guid": "8efd7c5c-d83c-4786-b399-b7bd548839e1",
        "memory": 512,
        "instances": 2,
        "disk_quota": 1024,
        "state": "STOPPED",
        "package_state": "STAGED",
        "docker_credentials_json": {
          "redacted_message": "[PRIVATE DATA HIDDEN]"
        },
        "space_url": "/v2/spaces/8efd7c5c-d83c-4786-b399-b7bd548839e1"
      }
    }
  ]
}"#;

pub const APP: &str = r#"{
  "metadata": {
    "guid": "9902530c-c634-4864-a189-71d763cb12e2",
    "url": "/v2/apps/9902530c-c634-4864-a189-71d763cb12e2",
    "created_at": "2016-06-08T16:41:44Z",
    "updated_at": "2016-06-08T16:41:44Z"
  },
  "entity": {
    "name": "test-env",
    "production": false,
    "space_guid": "a72fa1e8-c694-47b3-85f2-55f61fd00d73",
    "stack_guid": "d5e7dcd9-cfcd-4f3d-bfb7-d1e7ae2e0f9c",
    "buildpack": null,
    "detected_buildpack": null,
    "environment_json": null,
    "memory": 1024,
    "instances": 1,
    "disk_quota": 1024,
    "state": "STOPPED",
    "version": "f5696ac6-5c28-4c38-bba5-0e4c6f5f3d68",
    "command": null,
    "console": false,
    "debug": null,
    "staging_task_id": null,
    "package_state": "PENDING",
    "health_check_type": "port",
    "health_check_timeout": null,
    "staging_failed_reason": null,
    "staging_failed_description": null,
    "diego": false,
    "docker_image": null,
    "package_updated_at": "2016-06-08T16:41:45Z",
    "detected_start_command": "",
    "enable_ssh": true,
    "docker_credentials_json": {
      "redacted_message": "[PRIVATE DATA HIDDEN]"
    },
    "ports": null,
    "space_url": "/v2/spaces/a72fa1e8-c694-47b3-85f2-55f61fd00d73",
    "stack_url": "/v2/stacks/d5e7dcd9-cfcd-4f3d-bfb7-d1e7ae2e0f9c",
    "routes_url": "/v2/apps/9902530c-c634-4864-a189-71d763cb12e2/routes"
  }
}"#;

pub const APP_WITH_ENVIRONMENT: &str = r#"{
  "metadata": {
    "guid": "9902530c-c634-4864-a189-71d763cb12e2",
    "url": "/v2/apps/9902530c-c634-4864-a189-71d763cb12e2"
  },
  "entity": {
    "name": "test-env",
    "space_guid": "a72fa1e8-c694-47b3-85f2-55f61fd00d73",
    "environment_json": {
      "string": "string",
      "int": 1,
      "bool": true,
      "nested": { "list": [1, "two"] }
    },
    "state": "STARTED",
    "space_url": "/v2/spaces/a72fa1e8-c694-47b3-85f2-55f61fd00d73"
  }
}"#;

pub const SPACE: &str = r#"{
  "metadata": {
    "guid": "a72fa1e8-c694-47b3-85f2-55f61fd00d73",
    "url": "/v2/spaces/a72fa1e8-c694-47b3-85f2-55f61fd00d73",
    "created_at": "2014-09-24T13:54:54+00:00",
    "updated_at": null
  },
  "entity": {
    "name": "test-space",
    "organization_guid": "da0dba14-6064-4f7a-b15a-ff9e677e49b2",
    "space_quota_definition_guid": null,
    "allow_ssh": true,
    "organization_url": "/v2/organizations/da0dba14-6064-4f7a-b15a-ff9e677e49b2",
    "apps_url": "/v2/spaces/a72fa1e8-c694-47b3-85f2-55f61fd00d73/apps"
  }
}"#;

pub const ORG: &str = r#"{
  "metadata": {
    "guid": "da0dba14-6064-4f7a-b15a-ff9e677e49b2",
    "url": "/v2/organizations/da0dba14-6064-4f7a-b15a-ff9e677e49b2",
    "created_at": "2016-06-08T16:41:33Z",
    "updated_at": "2016-06-08T16:41:26Z"
  },
  "entity": {
    "name": "test-org",
    "billing_enabled": false,
    "quota_definition_guid": "6fc89c56-bbf3-4cf5-9e47-4a3e4a9a8e21",
    "status": "active",
    "spaces_url": "/v2/organizations/da0dba14-6064-4f7a-b15a-ff9e677e49b2/spaces"
  }
}"#;

pub const APP_INSTANCES: &str = r#"{
  "0": {
    "state": "RUNNING",
    "since": 1455210430.5104606,
    "uptime": 470
  },
  "1": {
    "state": "RUNNING",
    "since": 1455210430.3912115,
    "uptime": 470
  }
}"#;

pub const APP_INSTANCES_UNHEALTHY: &str = r#"{
  "0": {
    "state": "RUNNING",
    "since": 1455210430.5104606
  },
  "1": {
    "state": "STARTING",
    "since": "1455210430.3912115",
    "details": "insufficient resources"
  }
}"#;

pub const APP_STATS: &str = r#"{
  "0": {
    "state": "RUNNING",
    "stats": {
      "name": "example-app",
      "uris": ["example-app.example.com"],
      "host": "192.168.16.13",
      "port": 61035,
      "uptime": 6729,
      "mem_quota": 1073741824,
      "disk_quota": 1073741824,
      "fds_quota": 16384,
      "usage": {
        "time": "2016-09-17 15:46:17 +0000",
        "cpu": 0.36580239597146486,
        "mem": 518123520,
        "disk": 151150592
      }
    }
  },
  "1": {
    "state": "RUNNING",
    "stats": {
      "name": "example-app",
      "uris": ["example-app.example.com"],
      "host": "192.168.16.13",
      "port": 61036,
      "uptime": 6729,
      "mem_quota": 1073741824,
      "disk_quota": 1073741824,
      "fds_quota": 16384,
      "usage": {
        "time": "2016-09-17 15:46:17 +0000",
        "cpu": 0.33857742931636664,
        "mem": 530731008,
        "disk": 151150592
      }
    }
  },
  "2": {
    "state": "RUNNING",
    "stats": {
      "name": "example-app",
      "uris": ["example-app.example.com"],
      "host": "192.168.16.14",
      "port": 61035,
      "uptime": 6729,
      "mem_quota": 1073741824,
      "disk_quota": 1073741824,
      "fds_quota": 16384,
      "usage": {
        "time": "2017-04-06T20:32:19.273294439Z",
        "cpu": 0.33857742931636664,
        "mem": 530731008,
        "disk": 151150592
      }
    }
  },
  "3": {
    "state": "RUNNING",
    "stats": {
      "name": "example-app",
      "uris": ["example-app.example.com"],
      "host": "192.168.16.14",
      "port": 61036,
      "uptime": 6729,
      "mem_quota": 1073741824,
      "disk_quota": 1073741824,
      "fds_quota": 16384,
      "usage": {
        "time": "2017-04-12 15:27:44 UTC",
        "cpu": 0.33857742931636664,
        "mem": 530731008,
        "disk": 151150592
      }
    }
  },
  "4": {
    "state": "DOWN",
    "stats": null
  }
}"#;

pub const APP_ROUTES: &str = r#"{
  "total_results": 1,
  "total_pages": 1,
  "prev_url": null,
  "next_url": null,
  "resources": [
    {
      "metadata": {
        "guid": "311d34d1-c045-4853-845f-05132377ad7d",
        "url": "/v2/routes/311d34d1-c045-4853-845f-05132377ad7d",
        "created_at": "2016-06-08T16:41:44Z",
        "updated_at": "2016-06-08T16:41:44Z"
      },
      "entity": {
        "host": "host-36",
        "path": "/foo",
        "domain_guid": "40a499f7-198a-4289-9aa2-605ba43f92ee",
        "space_guid": "c7c0dd06-b078-43d7-adcb-3974cd785fdd",
        "service_instance_guid": null,
        "port": null,
        "domain_url": "/v2/private_domains/40a499f7-198a-4289-9aa2-605ba43f92ee",
        "space_url": "/v2/spaces/c7c0dd06-b078-43d7-adcb-3974cd785fdd",
        "apps_url": "/v2/routes/311d34d1-c045-4853-845f-05132377ad7d/apps"
      }
    }
  ]
}"#;

pub const APP_ENV: &str = r#"{
  "staging_env_json": {
    "STAGING_ENV": "staging_value"
  },
  "running_env_json": {
    "RUNNING_ENV": "running_value"
  },
  "environment_json": {
    "env_var": "env_val"
  },
  "system_env_json": {
    "VCAP_SERVICES": {
      "abc": 123
    }
  },
  "application_env_json": {
    "VCAP_APPLICATION": {
      "limits": {
        "mem": 1024,
        "disk": 1024,
        "fds": 16384
      },
      "application_id": "a7c47787-a982-467c-95d7-9ab17cbcc918",
      "application_version": "6c35e5cd-1a2f-4d50-b81a-9e9d4da42a54",
      "application_name": "name-2245",
      "application_uris": [],
      "version": "6c35e5cd-1a2f-4d50-b81a-9e9d4da42a54",
      "name": "name-2245",
      "space_name": "name-2246",
      "space_id": "5d3d8a79-5b5b-4b4f-8a4c-0cd4b3cf7ec9",
      "uris": [],
      "users": null
    }
  }
}"#;

pub const APP_SUMMARY: &str = r#"{
  "guid": "b5f0d1bd-a3a9-40a4-af1a-312ad26e5379",
  "name": "test-app",
  "routes": [
    {
      "guid": "d4185d5b-b8a4-4a1c-8da6-a7c6a4bb5a76",
      "host": "test-app",
      "port": null,
      "path": "",
      "domain": {
        "guid": "ac8f2a81-6a4c-4e5b-b4d6-4ec8b5e5c0a3",
        "name": "example.com"
      }
    }
  ],
  "running_instances": 1,
  "services": [
    {
      "guid": "0e0ee8d8-1d39-4a3f-9f68-1a1d41ed6a53",
      "name": "test-db"
    }
  ],
  "service_count": 1,
  "available_domains": [],
  "production": false,
  "space_guid": "494d8b64-8181-4183-a6d3-6279db8fec6e",
  "stack_guid": "67e019a3-322a-407a-96e0-178e95bd0e55",
  "buildpack": "ruby_buildpack",
  "detected_buildpack": "",
  "environment_json": {},
  "memory": 256,
  "instances": 1,
  "disk_quota": 512,
  "state": "STARTED",
  "version": "e3a2d0e5-4a73-4b35-b5b0-9b5b4ee0e58a",
  "command": null,
  "console": false,
  "debug": null,
  "staging_task_id": "ecd9b3a4-4d1c-4b87-a2d8-f8e4b3a3c6a0",
  "package_state": "STAGED",
  "health_check_type": "port",
  "health_check_timeout": null,
  "staging_failed_reason": null,
  "staging_failed_description": null,
  "diego": true,
  "docker_image": null,
  "package_updated_at": "2016-06-08T16:41:45Z",
  "detected_start_command": "rackup -p $PORT",
  "enable_ssh": true,
  "docker_credentials_json": {
    "redacted_message": "[PRIVATE DATA HIDDEN]"
  },
  "ports": null
}"#;

pub const CF_NOT_FOUND: &str = r#"{
  "code": 100004,
  "description": "The app could not be found: 9902530c-c634-4864-a189-71d763cb12e2",
  "error_code": "CF-AppNotFound"
}"#;
