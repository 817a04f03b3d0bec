/*
[INPUT]:  Signed requests without parameters
[OUTPUT]: Auth test envelope and license/system snapshot
[POS]:    HTTP layer - license-level endpoints
[UPDATE]: When adding license-level endpoints
*/

use reqwest::Method;

use crate::http::request::ResourcePath;
use crate::http::{AnydeskClient, Result};
use crate::types::{GenericResult, SysInfo};

impl AnydeskClient {
    /// Check that the credentials are accepted
    ///
    /// A rejection comes back as `AnydeskError::Api`; its `envelope()`
    /// carries `success == false`.
    ///
    /// GET /auth
    pub async fn auth_test(&self) -> Result<GenericResult> {
        let builder = self.request(Method::GET, ResourcePath::new().push("auth"));
        let mut result: GenericResult = self.send_json(builder).await?;
        result.success = true;
        Ok(result)
    }

    /// License metadata and client/session counters
    ///
    /// GET /sysinfo
    pub async fn sys_info(&self) -> Result<SysInfo> {
        let builder = self.request(Method::GET, ResourcePath::new().push("sysinfo"));
        self.send_json(builder).await
    }
}
