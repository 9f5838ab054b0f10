use serde::Deserialize;
use tracing::info;

use crate::action::{Action, require, require_all};
use crate::envelope::Keyed;
use crate::types::{SshKey, SshKeyResult};
use crate::{AtlanticClient, Error, Result};

#[derive(Deserialize)]
struct ListSshKeysResult {
    #[serde(rename = "list-sshkeysresponse")]
    response: ListSshKeysResponse,
}

#[derive(Deserialize)]
struct ListSshKeysResponse {
    #[serde(rename = "KeysSet", default)]
    keys: Keyed<SshKey>,
}

#[derive(Deserialize)]
struct AddSshKeyResult {
    #[serde(rename = "add-sshkeyresponse")]
    response: AddSshKeyResponse,
}

#[derive(Deserialize)]
struct AddSshKeyResponse {
    result: SshKeyResult,
}

#[derive(Deserialize)]
struct DeleteSshKeyResult {
    #[serde(rename = "delete-sshkeyresponse")]
    response: DeleteSshKeyResponse,
}

#[derive(Deserialize)]
struct DeleteSshKeyResponse {
    #[serde(rename = "delete-sshkey", default)]
    keys: Keyed<SshKeyResult>,
}

fn add_action(name: &str, public_key: &str) -> Result<Action> {
    require(name, "Key name")?;
    require(public_key, "Public key")?;
    Ok(Action::new("add-sshkey")
        .param("key_name", name)
        .param("public_key", public_key))
}

fn delete_action(key_ids: &[String]) -> Result<Action> {
    require_all(key_ids, "SSH key ID")?;
    Ok(Action::new("delete-sshkey").joined("key_id", key_ids))
}

impl AtlanticClient {
    /// All SSH keys added to the account.
    pub async fn list_ssh_keys(&self) -> Result<Vec<SshKey>> {
        let res: ListSshKeysResult = self.call(&Action::new("list-sshkeys")).await?;
        Ok(res.response.keys.into_vec())
    }

    /// Look up the ID of the key registered under `name`.
    pub async fn ssh_key_id(&self, name: &str) -> Result<String> {
        require(name, "Key name")?;
        self.list_ssh_keys()
            .await?
            .into_iter()
            .find(|k| k.name == name)
            .map(|k| k.id)
            .ok_or_else(|| Error::SshKeyNotFound(name.to_string()))
    }

    pub async fn add_ssh_key(&self, name: &str, public_key: &str) -> Result<SshKeyResult> {
        let res: AddSshKeyResult = self.call(&add_action(name, public_key)?).await?;
        let added = res.response.result;
        info!(key_id = %added.id, key_name = name, "atlantic: ssh key added");
        Ok(added)
    }

    /// Delete one or more SSH keys by ID.
    pub async fn delete_ssh_key(&self, key_ids: &[String]) -> Result<Vec<SshKeyResult>> {
        let res: DeleteSshKeyResult = self.call(&delete_action(key_ids)?).await?;
        info!(count = key_ids.len(), "atlantic: ssh keys deleted");
        Ok(res.response.keys.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_requires_name_and_key() {
        assert!(matches!(add_action("", "ssh-ed25519 AAAA"), Err(Error::Validation("Key name"))));
        assert!(matches!(add_action("laptop", ""), Err(Error::Validation("Public key"))));
        assert_eq!(
            add_action("laptop", "ssh-ed25519 AAAA").unwrap().as_str(),
            "add-sshkey&key_name=laptop&public_key=ssh-ed25519 AAAA"
        );
    }

    #[test]
    fn delete_joins_ids_with_commas() {
        let one = vec!["k1".to_string()];
        let two = vec!["k1".to_string(), "k2".to_string()];
        assert_eq!(delete_action(&one).unwrap().as_str(), "delete-sshkey&key_id=k1");
        assert_eq!(delete_action(&two).unwrap().as_str(), "delete-sshkey&key_id=k1,k2");
        assert!(matches!(delete_action(&[]), Err(Error::Validation("SSH key ID"))));
    }

    #[test]
    fn add_result_is_required() {
        let res = serde_json::from_str::<AddSshKeyResult>(r#"{"add-sshkeyresponse": {}}"#);
        assert!(res.is_err());

        let res: AddSshKeyResult = serde_json::from_str(
            r#"{"add-sshkeyresponse": {"requestid": "r", "result": {
                "key_id": "k-9", "message": "added", "result": "true"
            }}}"#,
        )
        .unwrap();
        assert_eq!(res.response.result.id, "k-9");
    }
}
