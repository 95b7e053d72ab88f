//! Template file contents

/// Root descriptor of the generated module
pub const ROOT_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xmlns="http://maven.apache.org/POM/4.0.0"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>{{group_id}}</groupId>
        <artifactId>{{parent_artifact}}</artifactId>
        <version>${revision}</version>
    </parent>
    <artifactId>{{root_artifact}}</artifactId>
    <packaging>pom</packaging>
    <name>Cubo {{capitalized}} Spring Boot</name>
    <description>{{description}}</description>
    <modules>
        <module>{{core_artifact}}</module>
        <module>{{autoconfigure_artifact}}</module>
        <module>{{starter_artifact}}</module>
    </modules>
</project>
"#;

/// Core submodule descriptor
pub const CORE_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>{{group_id}}</groupId>
        <artifactId>{{root_artifact}}</artifactId>
        <version>${revision}</version>
    </parent>
    <artifactId>{{core_artifact}}</artifactId>
    <name>Cubo {{capitalized}} Spring Boot Core</name>
    <dependencies>
        <dependency>
            <groupId>{{group_id}}</groupId>
            <artifactId>blen-kernel-common</artifactId>
        </dependency>
        <dependency>
            <groupId>{{group_id}}</groupId>
            <artifactId>cubo-logsystem-simple</artifactId>
        </dependency>
    </dependencies>
</project>
"#;

/// Autoconfigure submodule descriptor
pub const AUTOCONFIGURE_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>{{group_id}}</groupId>
        <artifactId>{{root_artifact}}</artifactId>
        <version>${revision}</version>
    </parent>
    <artifactId>{{autoconfigure_artifact}}</artifactId>
    <name>Cubo {{capitalized}} Spring Boot Autoconfigure</name>
    <dependencies>
        <dependency>
            <groupId>{{group_id}}</groupId>
            <artifactId>blen-kernel-autoconfigure</artifactId>
        </dependency>
        <dependency>
            <groupId>{{group_id}}</groupId>
            <artifactId>{{core_artifact}}</artifactId>
            <optional>true</optional>
        </dependency>
        <dependency>
            <groupId>{{group_id}}</groupId>
            <artifactId>cubo-logsystem-simple</artifactId>
        </dependency>
    </dependencies>
</project>
"#;

/// Starter submodule descriptor
pub const STARTER_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>{{group_id}}</groupId>
        <artifactId>{{root_artifact}}</artifactId>
        <version>${revision}</version>
    </parent>
    <artifactId>{{starter_artifact}}</artifactId>
    <name>Cubo {{capitalized}} Spring Boot Starter</name>
    <dependencies>
        <dependency>
            <groupId>{{group_id}}</groupId>
            <artifactId>{{autoconfigure_artifact}}</artifactId>
        </dependency>
        <dependency>
            <groupId>{{group_id}}</groupId>
            <artifactId>{{core_artifact}}</artifactId>
        </dependency>
    </dependencies>
</project>
"#;

/// Auto-configuration registration class
pub const AUTO_CONFIGURATION_JAVA: &str = r#"package {{package}}.autoconfigure;

import dev.dong4j.zeka.kernel.autoconfigure.ZekaProperties;
import dev.dong4j.zeka.kernel.common.start.ZekaAutoConfiguration;
import lombok.extern.slf4j.Slf4j;
import org.springframework.boot.autoconfigure.condition.ConditionalOnProperty;
import org.springframework.boot.context.properties.EnableConfigurationProperties;
import org.springframework.context.annotation.Configuration;

/**
 * {{description}} auto-configuration
 *
 * @author {{author}}
 * @version 1.0.0
 * @date {{date}}
 * @since 1.0.0
 */
@Slf4j
@Configuration(proxyBeanMethods = false)
@ConditionalOnProperty(
    prefix = {{capitalized}}Properties.PREFIX,
    name = ZekaProperties.ENABLE,
    havingValue = ZekaProperties.ON,
    matchIfMissing = true)
@EnableConfigurationProperties({{capitalized}}Properties.class)
public class {{capitalized}}AutoConfiguration implements ZekaAutoConfiguration {

    public {{capitalized}}AutoConfiguration() {
        log.info("[{}] start autoconfiguration....", {{capitalized}}AutoConfiguration.class);
    }
}
"#;

/// Configuration-properties holder class
pub const PROPERTIES_JAVA: &str = r#"package {{package}}.autoconfigure;

import lombok.Data;
import org.springframework.boot.context.properties.ConfigurationProperties;

/**
 * {{description}} settings
 *
 * @author {{author}}
 * @version 1.0.0
 * @date {{date}}
 * @since 1.0.0
 */
@Data
@ConfigurationProperties(prefix = {{capitalized}}Properties.PREFIX)
public class {{capitalized}}Properties {
    /** Configuration key prefix */
    public static final String PREFIX = "{{property_prefix}}.{{name}}";
}
"#;

/// Auto-configuration smoke test
pub const AUTO_CONFIGURATION_TEST_JAVA: &str = r#"package {{package}}.autoconfigure;

import dev.dong4j.zeka.kernel.test.ZekaTest;
import lombok.extern.slf4j.Slf4j;
import org.junit.jupiter.api.Test;

/**
 * {{description}} auto-configuration test
 *
 * @author {{author}}
 * @version 1.0.0
 * @date {{date}}
 * @since 1.0.0
 */
@Slf4j
@ZekaTest(classes = {{capitalized}}AutoConfiguration.class)
class {{capitalized}}AutoConfigurationTest {

    @Test
    void test() {
        log.info("hello tester");
    }
}
"#;

/// Dependency block spliced into the dependency catalogue
pub const DEPENDENCY_BLOCK: &str = r"            <!--region {{name}} -->
            <dependency>
                <groupId>{{group_id}}</groupId>
                <artifactId>{{core_artifact}}</artifactId>
                <version>{{dependency_version}}</version>
            </dependency>
            <dependency>
                <groupId>{{group_id}}</groupId>
                <artifactId>{{autoconfigure_artifact}}</artifactId>
                <version>{{dependency_version}}</version>
            </dependency>
            <dependency>
                <groupId>{{group_id}}</groupId>
                <artifactId>{{starter_artifact}}</artifactId>
                <version>{{dependency_version}}</version>
            </dependency>
            <!--endregion-->";

/// Module line spliced into the module registry
pub const MODULE_LINE: &str = "        <module>{{root_artifact}}</module>";
